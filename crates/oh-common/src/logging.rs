//! Subscriber setup for the events the helper crates emit.
//!
//! The helpers never install a subscriber themselves. What they report:
//!
//! | Target        | Level   | Event                                            |
//! |---------------|---------|--------------------------------------------------|
//! | `oh_convert`  | `trace` | a coercion fell back to its default              |
//! | `oh_convert`  | `debug` | an unknown enum name was skipped                 |
//! | `oh_convert`  | `warn`  | a delimiter pattern failed to compile            |
//! | `oh_datetime` | `trace` | ISO 8601 input could not be parsed               |
//! | `oh_io`       | `debug` | a file was loaded into memory                    |
//! | `oh_table`    | `trace` | a row lookup named an absent column              |
//!
//! Input text carried by these events goes through [`redact_value`] and is
//! hidden until value logging is switched on.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

static LOG_VALUES_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged in place of input text.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const HELPER_TARGETS: &[&str] = &["oh_common", "oh_convert", "oh_datetime", "oh_io", "oh_table"];

/// Allows or forbids raw input text in helper events.
pub fn set_log_values(enabled: bool) {
    LOG_VALUES_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn log_values_enabled() -> bool {
    LOG_VALUES_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when value logging is on, otherwise [`REDACTED_VALUE`].
pub fn redact_value(value: &str) -> &str {
    if log_values_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Level and output shape for [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for the helper targets when `RUST_LOG` is unset.
    pub level: Level,
    /// One JSON object per event instead of compact text.
    pub json: bool,
    /// Passed to [`set_log_values`] on init.
    pub log_values: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json: false,
            log_values: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    #[must_use]
    pub fn with_log_values(mut self, log_values: bool) -> Self {
        self.log_values = log_values;
        self
    }
}

/// Installs a global subscriber writing to stderr.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    init_logging_with_writer(config, io::stderr)
}

/// Installs a global subscriber writing to `writer`.
///
/// `RUST_LOG` overrides the level in `config` when it is set and valid.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    set_log_values(config.log_values);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config.level)));
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_ansi(false).with_writer(writer))
            .try_init()
    };
    installed.map_err(io::Error::other)
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    std::iter::once("warn".to_string())
        .chain(HELPER_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}
