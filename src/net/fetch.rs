use crate::errors::InvokerError;
use crate::net::cookies::cookie_header;
use crate::net::{Request, Response};
use http::header::COOKIE;
use http::HeaderMap;

/// Builds the header map that goes on the wire for `request`.
///
/// The synthesized `Cookie` header replaces a `Cookie` entry in the header set
/// when the cookie set is non-empty.
pub(crate) fn request_headers(request: &Request) -> Result<HeaderMap, InvokerError> {
    let mut headers = request.headers.as_header_map().clone();
    if let Some(cookie) = cookie_header(&request.cookies)? {
        headers.insert(COOKIE, cookie);
    }
    Ok(headers)
}

// Issues exactly one GET for the request and returns the buffered response
pub async fn fetch(request: &Request) -> Result<Response, InvokerError> {
    let headers = request_headers(request)?;

    // No default headers and no retries: one request, as given
    let client = reqwest::Client::builder().build()?;

    log::debug!(
        "GET {} ({} headers, {} cookies)",
        request.url,
        request.headers.len(),
        request.cookies.len()
    );
    let res = client.get(&request.url).headers(headers).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}

/// Fetches `request` and returns the decoded response text.
///
/// Status and response headers are logged at debug level only.
pub async fn invoke(request: &Request) -> Result<String, InvokerError> {
    let resp = fetch(request).await.inspect_err(|e| {
        log::debug!("GET {} failed: {}", request.url, e);
    })?;

    log::debug!("{} {} {}", resp.url, resp.status, resp.status_text);
    for (name, value) in resp.headers.iter() {
        log::debug!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }

    Ok(resp.text())
}
