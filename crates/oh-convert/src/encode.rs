//! XML, HTML, URL and JSON encoders.

use oh_common::Value;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use quick_xml::escape::{escape, resolve_html5_entity, unescape_with};
use serde::Serialize;
use url::form_urlencoded;

use crate::error::Result;

/// Characters escaped in URL path segments besides controls and non-ASCII.
const PATH_SEGMENT: &AsciiSet = &CONTROLS.add(b' ');

/// Escapes the five reserved XML characters in the trimmed text.
pub fn xml_encode(value: &str) -> String {
    escape(value.trim()).into_owned()
}

/// Decodes the five reserved XML entities in the trimmed text.
///
/// Other entities are left untouched. `&amp;` is replaced first, so a
/// double-escaped entity such as `&amp;lt;` comes out fully decoded as `<`.
pub fn xml_decode(value: &str) -> String {
    value
        .trim()
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// HTML-escapes the value's string form.
pub fn to_html_encode(value: impl Into<Value>) -> String {
    let text = value.into().to_string();
    escape(&text).replace("&apos;", "&#39;")
}

/// Decodes named and numeric HTML character references.
///
/// Malformed input is returned unchanged.
pub fn to_html_decode(value: impl Into<Value>) -> String {
    let text = value.into().to_string();
    match unescape_with(&text, resolve_html5_entity) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            tracing::trace!(%error, "html decode left input unchanged");
            text
        }
    }
}

/// Form encoding: spaces become `+`, reserved characters are `%`-escaped.
pub fn to_url_encode(value: impl Into<Value>) -> String {
    let text = value.into().to_string();
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Reverses [`to_url_encode`]; invalid UTF-8 sequences are replaced.
pub fn to_url_decode(value: impl Into<Value>) -> String {
    let text = value.into().to_string().replace('+', " ");
    percent_decode_str(&text).decode_utf8_lossy().into_owned()
}

/// Path encoding: spaces become `%20`, other ASCII is kept.
pub fn to_url_path_encode(value: impl Into<Value>) -> String {
    let text = value.into().to_string();
    utf8_percent_encode(&text, PATH_SEGMENT).to_string()
}

/// Serializes to a JSON string.
///
/// # Errors
///
/// Returns [`ConvertError::Json`](crate::ConvertError::Json) when the value
/// cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
