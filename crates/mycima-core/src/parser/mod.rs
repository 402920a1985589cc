//! HTML parsers for MyCima pages
//!
//! This module contains parsers for extracting data from MyCima HTML pages:
//! - `document`: Selector-based field extraction shared by all parsers
//! - `serie`: Parse a series page (title + season links)
//! - `season`: Parse a season page (title + episode links)
//! - `episode`: Parse an episode page (predecessor pointers + downloads)

pub mod document;
pub mod episode;
pub mod season;
pub mod serie;

// Re-export main parsing functions
pub use document::{extract_fields, FieldMap, Node, NodeList};
pub use episode::{parse_episode, NO_EPISODE_TITLE};
pub use season::{parse_season, NO_SEASON_TITLE};
pub use serie::{parse_serie, NO_SERIE_TITLE};

use crate::url::clean_url;

/// Normalized href of a node; `None` when the href is missing or blank.
///
/// Hrefs that do not decode are kept raw rather than dropping the node.
fn normalized_href(node: &Node) -> Option<String> {
    let href = node.href()?;
    Some(clean_url(href).unwrap_or_else(|_| href.to_string()))
}

/// Turn listed anchors into entries built by `entry(title, link)`,
/// skipping anchors without href.
fn link_entries<T>(nodes: &NodeList, entry: impl Fn(String, String) -> T) -> Vec<T> {
    nodes
        .iter()
        .filter_map(|node| {
            let link = normalized_href(node)?;
            Some(entry(node.text().trim().to_string(), link))
        })
        .collect()
}
