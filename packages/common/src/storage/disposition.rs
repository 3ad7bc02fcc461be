/// Build a `Content-Disposition` value forcing a download.
///
/// With a filename, browsers save under the human-readable name instead of
/// the opaque storage key. The ASCII `filename` parameter is a lossy
/// fallback for old clients; `filename*` carries the exact name per
/// RFC 5987.
pub fn attachment_disposition(filename: Option<&str>) -> String {
    let Some(filename) = filename else {
        return "attachment".to_string();
    };

    let ascii_safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ';' | '\\'))
        .collect();
    let ascii_name = if ascii_safe.is_empty() {
        "download".to_string()
    } else {
        ascii_safe
    };

    format!(
        "attachment; filename=\"{ascii_name}\"; filename*=UTF-8''{}",
        percent_encode(filename)
    )
}

/// RFC 5987 percent-encoding for the `filename*` parameter.
fn percent_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => String::from(b as char),
            _ => format!("%{b:02X}"),
        })
        .collect()
}
