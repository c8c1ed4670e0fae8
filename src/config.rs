//! Invoker configuration.
//!
//! `InvokerConfig` holds the target URL, headers and cookies for the one
//! request a run performs. The values shipped in [`Default`] are the ones the
//! binary uses; there are no config files or environment overrides.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use request_invoker::InvokerConfig;
//! let cfg = InvokerConfig::default();
//! assert_eq!(cfg.url, "http://example.com/api");
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use request_invoker::InvokerConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = InvokerConfig::builder()
//!     .url("https://httpbin.org/anything")
//!     .clear_headers()
//!     .header("Accept", "text/plain")
//!     .cookie("theme", "dark")
//!     .build()?; // returns Result<InvokerConfig, InvokerError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! `build()` returns [`InvokerError`] when the URL is empty or a header or
//! cookie could not be sent.

use crate::errors::InvokerError;
use crate::net::{CookieSet, HeaderSet, Request};

const DEFAULT_URL: &str = "http://example.com/api";
const DEFAULT_HEADERS: &[(&str, &str)] = &[("Host", "example.com")];
const DEFAULT_COOKIES: &[(&str, &str)] = &[("session_id", "123456"), ("user_name", "john\\doe")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerConfig {
    /// Target URL, passed to the transport unparsed.
    pub url: String,
    /// Header name/value pairs. Later entries replace earlier ones with the same name.
    pub headers: Vec<(String, String)>,
    /// Cookie name/value pairs. Later entries replace earlier ones with the same name.
    pub cookies: Vec<(String, String)>,
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            headers: owned(DEFAULT_HEADERS),
            cookies: owned(DEFAULT_COOKIES),
        }
    }
}

impl InvokerConfig {
    pub fn builder() -> InvokerConfigBuilder {
        InvokerConfigBuilder::default()
    }

    /// Converts the configuration into the [`Request`] handed to `fetch`.
    pub fn request(&self) -> Result<Request, InvokerError> {
        if self.url.is_empty() {
            return Err(InvokerError::EmptyUrl);
        }

        let mut headers = HeaderSet::new();
        for (name, value) in &self.headers {
            headers.insert(name, value)?;
        }

        let mut cookies = CookieSet::new();
        for (name, value) in &self.cookies {
            cookies.insert(name, value)?;
        }

        Ok(Request::new(self.url.clone())
            .with_headers(headers)
            .with_cookies(cookies))
    }
}

/// Builder for [`InvokerConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct InvokerConfigBuilder {
    inner: InvokerConfig,
}

impl InvokerConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut InvokerConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn url<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.url = url.into()) }
    pub fn header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self { self.map(|c| c.headers.push((name.into(), value.into()))) }
    pub fn cookie<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self { self.map(|c| c.cookies.push((name.into(), value.into()))) }
    pub fn clear_headers(self) -> Self { self.map(|c| c.headers.clear()) }
    pub fn clear_cookies(self) -> Self { self.map(|c| c.cookies.clear()) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut InvokerConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<InvokerConfig, InvokerError> {
        self.inner.request()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_baked_in_request() {
        let request = InvokerConfig::default().request().unwrap();

        assert_eq!(request.url, "http://example.com/api");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers.get("host"), Some("example.com"));
        assert_eq!(request.cookies.get("session_id"), Some("123456"));
        assert_eq!(request.cookies.get("user_name"), Some("john\\doe"));
    }

    #[test]
    fn builder_overrides() {
        let cfg = InvokerConfig::builder()
            .url("http://127.0.0.1:8080/x")
            .clear_headers()
            .clear_cookies()
            .header("Accept", "text/plain")
            .cookie("a", "1")
            .cookie("a", "2")
            .build()
            .unwrap();

        let request = cfg.request().unwrap();
        assert_eq!(request.url, "http://127.0.0.1:8080/x");
        assert_eq!(request.headers.get("accept"), Some("text/plain"));
        assert_eq!(request.cookies.len(), 1);
        assert_eq!(request.cookies.get("a"), Some("2"));
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = InvokerConfig::builder().url("").build().unwrap_err();
        assert!(matches!(err, InvokerError::EmptyUrl));
    }

    #[test]
    fn bad_header_fails_build() {
        let err = InvokerConfig::builder()
            .header("X-Bad", "a\nb")
            .build()
            .unwrap_err();
        assert!(matches!(err, InvokerError::InvalidHeader { .. }));
    }

    #[test]
    fn with_applies_closure() {
        let cfg = InvokerConfig::builder()
            .with(|c| {
                c.headers.clear();
                c.cookies.clear();
            })
            .build()
            .unwrap();
        assert!(cfg.headers.is_empty());
        assert!(cfg.cookies.is_empty());
    }
}
