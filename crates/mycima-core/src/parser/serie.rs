//! Series page parser for MyCima
//!
//! Parses HTML from a series page to extract its title and season links.

use crate::error::Result;
use crate::selectors::SerieSelectors;
use crate::types::{SeasonEntry, SerieListing};

use super::document::extract_fields;
use super::link_entries;

/// Title used when the series page has no title element.
pub const NO_SERIE_TITLE: &str = "no serie title";

/// Parse a series page.
///
/// # Arguments
/// * `html` - Raw HTML content of the series page
/// * `link` - Normalized URL of the page (stored as the listing link)
/// * `selectors` - Series page selectors
///
/// # Returns
/// * `Ok(SerieListing)` with seasons in site order
/// * `Err(MyCimaError::InvalidSelector)` if a selector cannot be queried
pub fn parse_serie(html: &str, link: &str, selectors: &SerieSelectors) -> Result<SerieListing> {
    let fields = extract_fields(
        html,
        &[("title", selectors.title.as_str()), ("seasons", selectors.seasons.as_str())],
    )?;

    let title = fields
        .get("title")?
        .text()
        .unwrap_or_else(|| NO_SERIE_TITLE.to_string());

    let seasons = link_entries(fields.get("seasons")?, |title, link| SeasonEntry {
        title,
        link,
    });

    Ok(SerieListing {
        title,
        link: link.to_string(),
        seasons,
    })
}
