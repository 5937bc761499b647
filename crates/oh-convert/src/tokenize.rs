//! Delimited-string tokenizer.
//!
//! Two modes:
//!
//! - literal: split on the delimiter string as-is, ignoring quotes.
//! - quote-aware: a double-quoted phrase is one token even when it contains
//!   the delimiter; the quotes are kept in the token.
//!
//! Both modes trim every token. The literal mode drops tokens that are empty
//! after trimming; the quote-aware mode keeps every match, so a
//! whitespace-only segment yields `""`.

use std::sync::LazyLock;

use regex::Regex;

/// Quote-aware pattern for the common comma delimiter.
static COMMA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&quoted_phrase_pattern(",")).expect("comma pattern must compile")
});

/// Splits `value` on `delimiter`.
///
/// Empty input yields no tokens. With an empty delimiter the literal mode
/// yields one token per character and the quote-aware mode yields the
/// trimmed input as a single token, even when that token is empty.
pub fn split_delimited(value: &str, delimiter: &str, ignore_quotes: bool) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    if ignore_quotes {
        split_literal(value, delimiter)
    } else {
        split_quote_aware(value, delimiter)
    }
}

/// Literal split, quotes ignored.
pub fn to_list_of_string(value: &str, delimiter: &str) -> Vec<String> {
    split_delimited(value, delimiter, true)
}

fn split_literal(value: &str, delimiter: &str) -> Vec<String> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_quote_aware(value: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![value.trim().to_string()];
    }

    if delimiter == "," {
        return collect_matches(&COMMA_PATTERN, value);
    }
    match Regex::new(&quoted_phrase_pattern(delimiter)) {
        Ok(regex) => collect_matches(&regex, value),
        Err(error) => {
            tracing::warn!(%error, delimiter, "delimiter pattern rejected; splitting literally");
            split_literal(value, delimiter)
        }
    }
}

fn collect_matches(regex: &Regex, value: &str) -> Vec<String> {
    regex
        .find_iter(value)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Either a quoted phrase, or a run of characters outside the delimiter set.
///
/// Each delimiter character is escaped on its own so metacharacters such as
/// `|`, `.`, `^`, `-` stay literal inside the negated class.
fn quoted_phrase_pattern(delimiter: &str) -> String {
    let class: String = delimiter
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!(r#"\s*"[^"]+"\s*|\s*[^{class}]+\s*"#)
}
