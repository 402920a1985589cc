//! Season and series aggregation
//!
//! A season is assembled by walking its episode chain from the most recent
//! episode; a series by aggregating each of its seasons in turn. Failures
//! are logged and surface as `None`, never as errors.

use crate::logger::ScrapeLogger;
use crate::parser::NO_SEASON_TITLE;
use crate::source::CatalogSource;
use crate::types::{SeasonRecord, SerieRecord};
use crate::url::clean_url;
use crate::walker::{walk, WalkOptions};

/// Build a full season by walking its episode chain.
///
/// # Arguments
/// * `season_url` - Season page URL
/// * `start` - Episode to start from; defaults to the most recent listed episode
/// * `end` - Oldest episode to include; defaults to walking to the first episode
///
/// # Returns
/// * `Some(SeasonRecord)` with episodes oldest first, possibly empty
/// * `None` when no start episode is given and the season lists none
pub async fn aggregate_season<S>(
    source: &S,
    season_url: &str,
    start: Option<&str>,
    end: Option<&str>,
    options: WalkOptions,
    logger: &ScrapeLogger,
) -> Option<SeasonRecord>
where
    S: CatalogSource + ?Sized,
{
    let listing = match source.season_listing(season_url).await {
        Ok(listing) => Some(listing),
        Err(e) => {
            logger.error(&format!("Failed to get season data for {}", season_url), &e);
            None
        }
    };

    let seed = match start {
        Some(start) => Some(start.to_string()),
        None => listing
            .as_ref()
            .and_then(|l| l.last_episode.as_ref())
            .map(|e| e.link.clone()),
    };
    let Some(seed) = seed else {
        logger.warn(&format!("No episode to start from in season {}", season_url));
        return None;
    };

    let title = listing
        .map(|l| l.title)
        .unwrap_or_else(|| NO_SEASON_TITLE.to_string());
    let link = clean_url(season_url).unwrap_or_else(|_| season_url.to_string());

    let episodes = walk(source, &seed, end, options, logger).await;
    logger.success(&format!("Season '{}' walked: {} episodes", title, episodes.len()));

    Some(SeasonRecord::new(title, link, episodes))
}

/// Build a full series, aggregating every listed season in site order.
///
/// The result has one slot per listed season; a season that could not be
/// aggregated is `None` in its slot.
///
/// # Returns
/// * `Some(SerieRecord)` unless the series page itself cannot be resolved
pub async fn aggregate_serie<S>(
    source: &S,
    serie_url: &str,
    options: WalkOptions,
    logger: &ScrapeLogger,
) -> Option<SerieRecord>
where
    S: CatalogSource + ?Sized,
{
    let listing = match source.serie_listing(serie_url).await {
        Ok(listing) => listing,
        Err(e) => {
            logger.error(&format!("Failed to get serie data for {}", serie_url), &e);
            return None;
        }
    };

    let mut seasons = Vec::with_capacity(listing.seasons.len());
    for entry in &listing.seasons {
        logger.info(&format!("Aggregating season: {}", entry.title));
        seasons.push(aggregate_season(source, &entry.link, None, None, options, logger).await);
    }

    Some(SerieRecord {
        title: listing.title,
        link: listing.link,
        seasons,
    })
}
