//! Response hardening for a JSON API that a separately hosted site reads
//! cross-origin.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{self, HeaderName},
    },
    middleware::Next,
    response::Response,
};

/// Nothing a JSON body could reference is allowed to load, and no page may frame it.
const JSON_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

/// Middleware that adds security headers to all responses.
///
/// Every response gets:
/// - X-Content-Type-Options: nosniff
/// - Referrer-Policy: no-referrer
/// - Cross-Origin-Resource-Policy: cross-origin (the frontend lives on another origin)
///
/// JSON responses additionally get a locked-down Content-Security-Policy and
/// `Cache-Control: no-store` unless the handler chose its own caching. HTML such
/// as the Scalar docs page is left alone so its scripts still load.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("cross-origin"),
    );

    if is_json {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(JSON_CSP),
        );
        headers
            .entry(header::CACHE_CONTROL)
            .or_insert(HeaderValue::from_static("no-store"));
    }

    response
}
