//! URL normalization helpers
//!
//! Links scraped from MyCima come percent-encoded (Arabic slugs) and download
//! mirrors are wrapped in a styled `.mp4.html` page. Everything stored in a
//! record goes through one of the two cleaners below.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::{MyCimaError, Result};

/// Decode percent-encoding in a URL.
///
/// # Errors
/// Returns `MyCimaError::InvalidUrl` if the decoded bytes are not valid UTF-8.
///
/// # Examples
/// ```
/// use mycima_core::url::clean_url;
///
/// assert_eq!(
///     clean_url("https://wecima.film/watch/%D9%85%D8%B3%D9%84%D8%B3%D9%84").unwrap(),
///     "https://wecima.film/watch/مسلسل"
/// );
/// ```
pub fn clean_url(url: &str) -> Result<String> {
    urlencoding::decode(url)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| MyCimaError::InvalidUrl(url.to_string()))
}

/// Collapse the styled `.mp4.html` suffix to `.mp4`, then decode.
///
/// # Errors
/// Returns `MyCimaError::InvalidUrl` if the decoded bytes are not valid UTF-8.
///
/// # Examples
/// ```
/// use mycima_core::url::clean_download_url;
///
/// assert_eq!(
///     clean_download_url("https://cdn.example/ep%201.mp4.html").unwrap(),
///     "https://cdn.example/ep 1.mp4"
/// );
/// ```
pub fn clean_download_url(url: &str) -> Result<String> {
    let collapsed = styled_mp4_regex().replace_all(url, ".mp4");
    clean_url(&collapsed)
}

/// Whether `url` looks like a MyCima series page.
pub fn is_serie_url(url: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^https?://wecima\.film/series/.+").unwrap())
        .is_match(url)
}

/// Whether `url` looks like a MyCima episode (watch) page.
pub fn is_episode_url(url: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^https?://wecima\.film/watch/.+").unwrap())
        .is_match(url)
}

fn styled_mp4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.mp4\.html").unwrap())
}
