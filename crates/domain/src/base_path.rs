//! Base-path rules for hosting the dashboard under a URL prefix.
//!
//! Operators may expose the dashboard at e.g. `https://host/pulse/` instead
//! of the server root. The configured value is normalized here; applying it
//! to requests is an adapter concern.

/// Strip surrounding whitespace and slashes from a configured base path.
///
/// Empty input or `/` normalizes to the empty string, meaning "no prefix".
#[must_use]
pub fn normalize(raw: &str) -> &str {
    raw.trim().trim_matches('/')
}

/// The normalized base path with a leading slash, or an empty string when
/// no prefix is configured.
#[must_use]
pub fn prefix(raw: &str) -> String {
    let base = normalize(raw);
    if base.is_empty() {
        String::new()
    } else {
        format!("/{base}")
    }
}
