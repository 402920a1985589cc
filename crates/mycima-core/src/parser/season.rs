//! Season page parser for MyCima
//!
//! Parses HTML from a season page to extract its title and the raw episode
//! list. The site lists episodes most recent first.

use crate::error::Result;
use crate::selectors::SeasonSelectors;
use crate::types::{EpisodeEntry, SeasonListing};

use super::document::extract_fields;
use super::link_entries;

/// Title used when the season page has no title element, or could not be read.
pub const NO_SEASON_TITLE: &str = "no season title";

/// Parse a season page.
///
/// # Arguments
/// * `html` - Raw HTML content of the season page
/// * `link` - Normalized URL of the page
/// * `selectors` - Season page selectors
///
/// # Returns
/// * `Ok(SeasonListing)`; `last_episode` is the first listed episode
/// * `Err(MyCimaError::InvalidSelector)` if a selector cannot be queried
pub fn parse_season(html: &str, link: &str, selectors: &SeasonSelectors) -> Result<SeasonListing> {
    let fields = extract_fields(
        html,
        &[("title", selectors.title.as_str()), ("episodes", selectors.episodes.as_str())],
    )?;

    let title = fields
        .get("title")?
        .text()
        .unwrap_or_else(|| NO_SEASON_TITLE.to_string());
    let episodes = link_entries(fields.get("episodes")?, |title, link| EpisodeEntry {
        title,
        link,
    });

    Ok(SeasonListing {
        title,
        link: link.to_string(),
        last_episode: episodes.first().cloned(),
        episodes,
    })
}
