// src/utils/url.rs

//! URL and request path helpers.

use url::Url;

use crate::error::Result;

/// Normalize a request path relative to `base_url`.
///
/// Trims surrounding whitespace, strips a leading `base_url` prefix and ensures
/// the result starts with `/`.
///
/// # Examples
/// ```
/// use apidoc_mapper::utils::url::normalize_path;
///
/// let base = "https://api.stackexchange.com";
/// assert_eq!(normalize_path(base, " docs/answers "), "/docs/answers");
/// assert_eq!(
///     normalize_path(base, "https://api.stackexchange.com/docs/sites"),
///     "/docs/sites"
/// );
/// ```
pub fn normalize_path(base_url: &str, path: &str) -> String {
    let trimmed = path.trim();
    let base = base_url.trim_end_matches('/');
    let relative = match trimmed.strip_prefix(base) {
        Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => trimmed,
    };

    if relative.starts_with('/') {
        relative.to_string()
    } else {
        format!("/{relative}")
    }
}

/// Build the absolute URL for a normalized request path.
pub fn join(base_url: &str, path: &str) -> Result<String> {
    let url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))?;
    Ok(url.to_string())
}
