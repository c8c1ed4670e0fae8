//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by
//! [`fetch`](crate::net::fetch). It contains the final URL (after redirects),
//! status code + reason, response headers, and the raw body bytes.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. Use [`Response::text`] to get the
//!   printable text, decoded with the `charset` from `Content-Type` (UTF-8 when
//!   absent or unknown). Nothing is parsed, trimmed or cut off.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is derived from the status code's canonical reason phrase
//!   and is `"Unknown"` for non-standard codes.
//!
use encoding_rs::{Encoding, UTF_8};
use http::header::CONTENT_TYPE;
use http::HeaderMap;

/// Simple structure for HTTP responses.
///
/// All fields reflect the **received** response as-is. Non-2xx statuses are
/// kept like any other.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Decodes the body to text, honouring the `charset` of `Content-Type`.
    pub fn text(&self) -> String {
        decode_body(&self.headers, &self.body)
    }
}

fn content_charset(headers: &HeaderMap) -> Option<String> {
    let ct = headers.get(CONTENT_TYPE)?.to_str().ok()?;

    // permissive parse: look for "charset=..." anywhere in the value
    let idx = ct.to_ascii_lowercase().find("charset=")?;
    let after = &ct[idx + "charset=".len()..];
    let end = after.find([';', ' ', '\t']).unwrap_or(after.len());
    let charset = after[..end].trim_matches('"');

    if charset.is_empty() {
        None
    } else {
        Some(charset.to_string())
    }
}

fn decode_body(headers: &HeaderMap, body: &[u8]) -> String {
    let encoding = match content_charset(headers) {
        Some(cs) => Encoding::for_label(cs.as_bytes()).unwrap_or_else(|| {
            log::debug!("unknown charset {cs:?}, decoding body as UTF-8");
            UTF_8
        }),
        None => UTF_8,
    };

    // BOM is part of the body, keep it
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        log::debug!("body is not valid {}, malformed bytes replaced", encoding.name());
    }
    text.into_owned()
}
