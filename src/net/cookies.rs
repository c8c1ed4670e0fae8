//! Turning a [`CookieSet`] into the `Cookie` request header.
//!
//! Pairs are written as `name=value` and joined with `"; "`, in insertion
//! order. Values go out exactly as stored.
use crate::errors::InvokerError;
use crate::net::CookieSet;
use http::header::HeaderValue;

/// Returns the `Cookie` header string for `cookies`, or `None` when the set is empty.
pub fn serialize_cookies(cookies: &CookieSet) -> Option<String> {
    let header = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");

    if header.is_empty() {
        None
    } else {
        Some(header)
    }
}

/// Same as [`serialize_cookies`], converted into a header value ready to send.
pub fn cookie_header(cookies: &CookieSet) -> Result<Option<HeaderValue>, InvokerError> {
    let Some(header) = serialize_cookies(cookies) else {
        return Ok(None);
    };

    HeaderValue::from_str(&header)
        .map(Some)
        .map_err(|e| InvokerError::InvalidCookie {
            name: "Cookie".to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> CookieSet {
        let mut cookies = CookieSet::new();
        for (n, v) in pairs {
            cookies.insert(n, v).unwrap();
        }
        cookies
    }

    #[test]
    fn empty_set_has_no_header() {
        assert_eq!(serialize_cookies(&CookieSet::new()), None);
        assert!(cookie_header(&CookieSet::new()).unwrap().is_none());
    }

    #[test]
    fn single_cookie() {
        assert_eq!(
            serialize_cookies(&set(&[("session_id", "123456")])).as_deref(),
            Some("session_id=123456")
        );
    }

    #[test]
    fn pairs_joined_in_insertion_order() {
        let cookies = set(&[("session_id", "123456"), ("user_name", "john\\doe")]);
        assert_eq!(
            serialize_cookies(&cookies).as_deref(),
            Some("session_id=123456; user_name=john\\doe")
        );

        let value = cookie_header(&cookies).unwrap().unwrap();
        assert_eq!(value.to_str().unwrap(), "session_id=123456; user_name=john\\doe");
    }
}
