//! Literal `chrono` format strings.
//!
//! Each constant notes the pattern it reproduces. Callers parse these outputs,
//! so they must not drift.

/// `MM/dd/yyyy HH:mm:ss:fff`
pub const SQL_DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S:%3f";

/// Sortable `yyyy-MM-ddTHH:mm:ss`; the ISO 8601 output appends a literal `Z`.
pub const ISO8601_SORTABLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `M/d/yyyy`
pub const SIMPLE_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// `M/d/yyyy h:mm tt`
pub const SIMPLE_DATE_TIME_FORMAT: &str = "%-m/%-d/%Y %-I:%M %p";

/// `MMM dd, yyyy h:mm` followed by a lowercase am/pm designator.
pub const FRIENDLY_DATE_TIME_FORMAT: &str = "%b %d, %Y %-I:%M%P";

/// `dddd, MMMM dd, yyyy`
pub const FULL_NAMED_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// `MMM dd, yyyy`
pub const NAMED_MONTH_DATE_FORMAT: &str = "%b %d, %Y";

/// `MMM d, yyyy h:mm:ss` followed by a lowercase am/pm designator.
pub const NAMED_MONTH_DATE_TIME_SECONDS_FORMAT: &str = "%b %-d, %Y %-I:%M:%S%P";

/// `h:mm`
pub const TIME_OF_DAY_FORMAT: &str = "%-I:%M";

/// `ddd`
pub const ABBREVIATED_DAY_FORMAT: &str = "%a";

/// Suffix appended to Eastern Time display strings.
pub const EASTERN_SUFFIX: &str = " ET";

/// Date-time layouts accepted by the lenient parser, tried in order after the
/// SQL pattern and RFC 3339.
pub(crate) const LENIENT_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
];

/// Date-only layouts accepted by the lenient parser; the time is midnight.
pub(crate) const LENIENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];
