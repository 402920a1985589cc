//! Page-level lookups the walker and aggregators are built on

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{EpisodeRecord, SeasonListing, SerieListing};

/// Resolves single pages of the catalog.
///
/// [`crate::MyCimaScraper`] implements this by fetching and parsing real
/// pages; the walker and the aggregators only ever see this trait.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Series title and season links.
    async fn serie_listing(&self, url: &str) -> Result<SerieListing>;

    /// Season title and raw episode links, most recent first.
    async fn season_listing(&self, url: &str) -> Result<SeasonListing>;

    /// A single episode with its predecessor pointers and downloads.
    async fn episode(&self, url: &str) -> Result<EpisodeRecord>;
}
