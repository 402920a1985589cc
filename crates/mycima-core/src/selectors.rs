//! CSS selector table for MyCima pages
//!
//! Defaults match the current site markup. They are plain strings so a
//! caller can patch one when the site changes without touching the parsers.

/// Selectors used on a series page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerieSelectors {
    /// Series title
    pub title: String,
    /// Links to the series' seasons, in site order
    pub seasons: String,
}

/// Selectors used on a season page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSelectors {
    /// Season title
    pub title: String,
    /// Links to the season's episodes, most recent first
    pub episodes: String,
}

/// Selectors used on an episode (watch) page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeSelectors {
    /// Episode title
    pub title: String,
    /// Explicit "previous episode" link
    pub previous_episode_link: String,
    /// Episode switcher buttons, most recent first
    pub episode_buttons: String,
    /// Download mirror links
    pub downloads: String,
}

/// Full selector table for the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSelectors {
    pub serie: SerieSelectors,
    pub season: SeasonSelectors,
    pub episode: EpisodeSelectors,
}

const TITLE: &str = ".Title--Content--Single-begin";
const EPISODE_LIST: &str = ".Episodes--Seasons--Episodes a";

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            serie: SerieSelectors {
                title: TITLE.to_string(),
                seasons: ".List--Seasons--Episodes a".to_string(),
            },
            season: SeasonSelectors {
                title: TITLE.to_string(),
                episodes: EPISODE_LIST.to_string(),
            },
            episode: EpisodeSelectors {
                title: TITLE.to_string(),
                previous_episode_link: ".PrevEpisode".to_string(),
                episode_buttons: EPISODE_LIST.to_string(),
                downloads: ".List--Download--Wecima--Single a".to_string(),
            },
        }
    }
}
