#![forbid(unsafe_code)]

//! Query-string codec: an explicit serialize/deserialize pair over ordered
//! key/value pairs, built on `form_urlencoded`.
//!
//! Decoding is lenient by contract: malformed input yields whatever pairs
//! can be salvaged, never an error, because unknown or garbled parameters
//! are ignored upstream anyway.

use url::form_urlencoded;

/// Serialize ordered pairs into an application/x-www-form-urlencoded
/// query string (no leading `?`).
#[must_use]
pub fn encode(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Parse a query string (with or without a leading `?`) into ordered
/// pairs. Percent-encoding and `+` spaces are decoded.
#[must_use]
pub fn decode(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
