use axum::http::HeaderMap;

/// Client address for audit entries, taken from the reverse proxy's
/// `X-Forwarded-For` (first hop) or `X-Real-IP`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next()?.trim();
        if !first.is_empty() {
            return Some(first.to_owned());
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
