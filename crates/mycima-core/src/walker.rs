//! Backward chain walk over episode pages
//!
//! The site only links from newer episodes to older ones. Starting from a
//! seed (normally the latest episode) the walker keeps resolving the
//! predecessor until it hits the end boundary, a dead end, or a page that
//! cannot be resolved, then returns what it collected oldest first.

use std::collections::HashSet;

use crate::logger::ScrapeLogger;
use crate::source::CatalogSource;
use crate::types::EpisodeRecord;
use crate::url::clean_url;

/// Limits applied to a single walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum number of episodes collected per walk (default: unbounded)
    pub max_chain_length: Option<usize>,
}

/// Pick the primary value when present, otherwise the secondary one.
pub fn first_present<'a>(primary: Option<&'a str>, secondary: Option<&'a str>) -> Option<&'a str> {
    match primary {
        Some(value) => Some(value),
        None => secondary,
    }
}

/// Link to follow from `record`: the explicit previous-episode pointer,
/// falling back to the switcher button.
pub fn predecessor(record: &EpisodeRecord) -> Option<&str> {
    first_present(
        record.previous_link.as_deref(),
        record.previous_button_link.as_deref(),
    )
}

/// Walk backward from `seed`, stopping after `end` (inclusive) if given.
///
/// Never fails: a page that cannot be resolved ends the walk and whatever was
/// collected so far is returned. An episode seen twice also ends the walk.
/// The result is ordered oldest to newest.
pub async fn walk<S>(
    source: &S,
    seed: &str,
    end: Option<&str>,
    options: WalkOptions,
    logger: &ScrapeLogger,
) -> Vec<EpisodeRecord>
where
    S: CatalogSource + ?Sized,
{
    // Compare against the decoded boundary
    let end = end.map(|link| clean_url(link).unwrap_or_else(|_| link.to_string()));

    let mut collected: Vec<EpisodeRecord> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = Some(seed.to_string());

    while let Some(link) = current.take() {
        if let Some(max) = options.max_chain_length {
            if collected.len() >= max {
                logger.warn(&format!("Chain length limit of {} reached at {}", max, link));
                break;
            }
        }

        let record = match source.episode(&link).await {
            Ok(record) => record,
            Err(e) => {
                logger.error(&format!("Stopping walk, could not resolve {}", link), &e);
                break;
            }
        };

        if !visited.insert(record.link.clone()) {
            logger.warn(&format!("Episode {} already collected, stopping walk", record.link));
            break;
        }
        logger.info(&format!("Collected episode: {} ({})", record.title, record.link));

        let reached_end = end.as_deref() == Some(record.link.as_str());
        let next = predecessor(&record).map(str::to_string);
        collected.push(record);

        if reached_end {
            break;
        }

        current = match next {
            Some(next) if visited.contains(&next) => {
                logger.warn(&format!("Predecessor {} already collected, stopping walk", next));
                None
            }
            next => next,
        };
    }

    collected.reverse();
    collected
}
