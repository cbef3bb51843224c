//! Resolution of the caller-facing base address used for URL rewriting.

use axum::http::HeaderMap;

/// Resolve the base address rewritten into outbound responses.
///
/// Precedence: a configured override wins, then forwarded-host headers
/// set by a fronting proxy, then the request's own apparent origin. The
/// result never carries a trailing slash. With no override, no forwarded
/// headers, and no Host header the result is empty, which downstream
/// means "skip rewriting".
pub fn resolve_base_address(headers: &HeaderMap, configured: Option<&str>) -> String {
    if let Some(base) = configured {
        let base = base.trim_end_matches('/');
        if !base.is_empty() {
            return base.to_string();
        }
    }

    if let Some(host) = header_str(headers, "x-forwarded-host") {
        let proto = header_str(headers, "x-forwarded-proto").unwrap_or("https");
        return format!("{proto}://{host}");
    }

    match header_str(headers, "host") {
        Some(host) => format!("http://{host}"),
        None => String::new(),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
