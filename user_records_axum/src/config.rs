//! Central configuration for the user_records_axum crate

use std::sync::LazyLock;

/// Origins the browser-facing CORS policy admits when nothing is configured
const DEFAULT_ALLOWED_ORIGINS: &str = "https://delme-users-1.onrender.com,\
https://jade-sunburst-3dc4a3.netlify.app,\
http://127.0.0.1:5500,\
http://localhost:5500";

/// Allow-listed browser origins
///
/// Comma separated list read from `USER_RECORDS_ALLOWED_ORIGINS`.
pub static USER_RECORDS_ALLOWED_ORIGINS: LazyLock<Vec<String>> = LazyLock::new(|| {
    parse_origins(
        std::env::var("USER_RECORDS_ALLOWED_ORIGINS")
            .ok()
            .as_deref(),
    )
});

/// Split a comma separated origin list, dropping blanks and trailing slashes
///
/// Browsers send `Origin` without a trailing slash, so `https://a.example/`
/// would never match as written.
pub(crate) fn parse_origins(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or(DEFAULT_ALLOWED_ORIGINS)
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
