//! Episode page parser for MyCima
//!
//! An episode page carries the two predecessor signals the chain walker
//! follows: the explicit "previous episode" link and the episode switcher,
//! whose buttons are listed most recent first.

use crate::error::Result;
use crate::selectors::EpisodeSelectors;
use crate::types::{DownloadRecord, EpisodeRecord};
use crate::url::clean_download_url;

use super::document::{extract_fields, NodeList};
use super::normalized_href;

/// Title used when the episode page has no title element.
pub const NO_EPISODE_TITLE: &str = "no episode title";

/// Parse an episode page.
///
/// # Arguments
/// * `html` - Raw HTML content of the episode page
/// * `link` - Normalized URL of the page; used as the record link and to
///   locate the current episode among the switcher buttons
/// * `selectors` - Episode page selectors
///
/// # Returns
/// * `Ok(EpisodeRecord)`; missing optional fields become `None` or empty
/// * `Err(MyCimaError::InvalidSelector)` if a selector cannot be queried
pub fn parse_episode(html: &str, link: &str, selectors: &EpisodeSelectors) -> Result<EpisodeRecord> {
    let fields = extract_fields(
        html,
        &[
            ("title", selectors.title.as_str()),
            ("previous_episode_link", selectors.previous_episode_link.as_str()),
            ("episode_buttons", selectors.episode_buttons.as_str()),
            ("downloads", selectors.downloads.as_str()),
        ],
    )?;

    let title = fields
        .get("title")?
        .text()
        .unwrap_or_else(|| NO_EPISODE_TITLE.to_string());

    let previous_link = fields
        .get("previous_episode_link")?
        .first()
        .and_then(normalized_href);

    Ok(EpisodeRecord {
        title,
        link: link.to_string(),
        previous_link,
        previous_button_link: previous_button_link(fields.get("episode_buttons")?, link),
        downloads: downloads(fields.get("downloads")?),
    })
}

/// Href of the button right after the one pointing at `link`.
///
/// Buttons run newest to oldest, so the following button is the predecessor.
/// If several buttons point at `link` the last one counts.
fn previous_button_link(buttons: &NodeList, link: &str) -> Option<String> {
    let current = buttons
        .iter()
        .rposition(|button| normalized_href(button).as_deref() == Some(link))?;
    buttons.get(current + 1).and_then(normalized_href)
}

fn downloads(nodes: &NodeList) -> Vec<DownloadRecord> {
    nodes
        .iter()
        .filter_map(|node| {
            let href = node.href()?;
            Some(DownloadRecord {
                label: node.text().trim().to_string(),
                link: clean_download_url(href).unwrap_or_else(|_| href.to_string()),
            })
        })
        .collect()
}
