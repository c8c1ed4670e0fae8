//! Request data model.
//!
//! A [`Request`] bundles everything needed for a single GET: the target URL,
//! a [`HeaderSet`] and a [`CookieSet`]. All three are built once, handed to
//! [`fetch`](crate::net::fetch) and dropped afterwards.
//!
//! ## Notes
//! - The URL is kept as a plain string. It is not parsed here; whatever the
//!   transport cannot make sense of comes back as a transport error.
//! - Header names are **case-insensitive** (`http::HeaderMap`), cookie names
//!   are **case-sensitive**.
use crate::errors::InvokerError;
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

/// Request headers keyed by case-insensitive name.
///
/// Inserting a name that is already present (in any casing) replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderSet {
    inner: HeaderMap,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a header.
    ///
    /// Fails when `name` is not a valid header name or `value` contains bytes
    /// that cannot be sent in a header (e.g. CR/LF).
    pub fn insert(&mut self, name: &str, value: &str) -> Result<(), InvokerError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| InvokerError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| InvokerError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.inner.insert(header_name, header_value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_header_map(&self) -> &HeaderMap {
        &self.inner
    }
}

/// Cookies to send, in insertion order.
///
/// Inserting an existing name replaces its value in place, so the original
/// position on the wire is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSet {
    entries: Vec<(String, String)>,
}

impl CookieSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a cookie.
    ///
    /// The value is stored raw (no quoting, no URL-encoding). Only pairs that
    /// cannot end up in a `Cookie` header at all are rejected.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<(), InvokerError> {
        if name.is_empty() {
            return Err(InvokerError::InvalidCookie {
                name: name.to_string(),
                reason: "cookie name is empty".to_string(),
            });
        }
        if let Err(e) = HeaderValue::from_str(&format!("{name}={value}")) {
            return Err(InvokerError::InvalidCookie {
                name: name.to_string(),
                reason: e.to_string(),
            });
        }

        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A single GET request: target URL plus the headers and cookies to attach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub url: String,
    pub headers: HeaderSet,
    pub cookies: CookieSet,
}

impl Request {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            headers: HeaderSet::new(),
            cookies: CookieSet::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_cookies(mut self, cookies: CookieSet) -> Self {
        self.cookies = cookies;
        self
    }
}
