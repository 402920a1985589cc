//! Data types for the MyCima scraper
//!
//! All types implement Serialize and Deserialize. JSON keys follow the
//! catalog format existing automation scripts already consume
//! (`SerieTitle`, `EpisodeDownloadLinks`, ...).

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// A season as listed on a series page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonEntry {
    #[serde(rename = "SeasonTitle")]
    pub title: String,
    #[serde(rename = "SeasonLink")]
    pub link: String,
}

/// An episode as listed on a season page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeEntry {
    #[serde(rename = "EpisodeTitle")]
    pub title: String,
    #[serde(rename = "EpisodeLink")]
    pub link: String,
}

/// Series page as listed, before any season is walked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieListing {
    #[serde(rename = "SerieTitle")]
    pub title: String,
    #[serde(rename = "SerieLink")]
    pub link: String,
    /// Seasons in site order
    #[serde(rename = "Seasons")]
    pub seasons: Vec<SeasonEntry>,
}

/// Season page as listed; entries carry no predecessor data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonListing {
    #[serde(rename = "SeasonTitle")]
    pub title: String,
    #[serde(rename = "SeasonLink")]
    pub link: String,
    /// Most recent episode, the default walk seed
    #[serde(rename = "LastEpisode")]
    pub last_episode: Option<EpisodeEntry>,
    /// Episodes as listed, most recent first
    #[serde(rename = "Episodes")]
    pub episodes: Vec<EpisodeEntry>,
}

/// One download mirror of an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Free-form label, usually carrying a quality tag such as "720p"
    #[serde(rename = "DownloadLabel")]
    pub label: String,
    /// Normalized absolute link
    #[serde(rename = "DownloadLink")]
    pub link: String,
}

impl DownloadRecord {
    /// Quality tag (e.g. "1080p") found in the label, if any.
    pub fn quality(&self) -> Option<&str> {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\d+p").unwrap())
            .find(&self.label)
            .map(|m| m.as_str())
    }
}

/// A resolved episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    #[serde(rename = "EpisodeTitle")]
    pub title: String,
    /// Normalized page URL; identifies the episode
    #[serde(rename = "EpisodeLink")]
    pub link: String,
    /// Explicit "previous episode" pointer
    #[serde(rename = "PreviewsEpisodeLink")]
    pub previous_link: Option<String>,
    /// Positional fallback taken from the episode switcher
    #[serde(rename = "PreviewsEpisodeButtonLink")]
    pub previous_button_link: Option<String>,
    #[serde(rename = "Downloads")]
    pub downloads: Vec<DownloadRecord>,
}

impl EpisodeRecord {
    /// Link of the first download mirror, if the episode has any.
    pub fn best_download_link(&self) -> Option<&str> {
        self.downloads.first().map(|d| d.link.as_str())
    }
}

/// A season with its episodes walked oldest to newest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "SeasonTitle")]
    pub title: String,
    #[serde(rename = "SeasonLink")]
    pub link: String,
    #[serde(rename = "Episodes")]
    pub episodes: Vec<EpisodeRecord>,
    /// `download_links[i]` is the best download link of `episodes[i]`
    #[serde(rename = "EpisodeDownloadLinks")]
    pub download_links: Vec<Option<String>>,
}

impl SeasonRecord {
    /// Build a season record, projecting the download links from `episodes`.
    pub fn new(title: String, link: String, episodes: Vec<EpisodeRecord>) -> Self {
        let download_links = episodes
            .iter()
            .map(|e| e.best_download_link().map(str::to_string))
            .collect();
        Self {
            title,
            link,
            episodes,
            download_links,
        }
    }

    /// Number of walked episodes.
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }
}

/// A full series; a season slot is `None` when that season could not be walked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieRecord {
    #[serde(rename = "SerieTitle")]
    pub title: String,
    #[serde(rename = "SerieLink")]
    pub link: String,
    #[serde(rename = "Seasons")]
    pub seasons: Vec<Option<SeasonRecord>>,
}

impl SerieRecord {
    /// Number of season slots, including seasons that failed.
    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download(label: &str, link: &str) -> DownloadRecord {
        DownloadRecord {
            label: label.to_string(),
            link: link.to_string(),
        }
    }

    fn episode(link: &str, downloads: Vec<DownloadRecord>) -> EpisodeRecord {
        EpisodeRecord {
            title: format!("Episode {}", link),
            link: link.to_string(),
            previous_link: None,
            previous_button_link: None,
            downloads,
        }
    }

    #[test]
    fn test_download_quality() {
        assert_eq!(download("Full HD 1080p", "l").quality(), Some("1080p"));
        assert_eq!(download("720p", "l").quality(), Some("720p"));
        assert_eq!(download("Direct", "l").quality(), None);
    }

    #[test]
    fn test_best_download_link() {
        let ep = episode("e1", vec![download("1080p", "a.mp4"), download("720p", "b.mp4")]);
        assert_eq!(ep.best_download_link(), Some("a.mp4"));
        assert_eq!(episode("e2", vec![]).best_download_link(), None);
    }

    #[test]
    fn test_season_record_projects_download_links() {
        let season = SeasonRecord::new(
            "Season 1".to_string(),
            "s1".to_string(),
            vec![
                episode("e1", vec![download("720p", "e1.mp4")]),
                episode("e2", vec![]),
                episode("e3", vec![download("480p", "e3.mp4"), download("1080p", "x")]),
            ],
        );
        assert_eq!(season.episode_count(), 3);
        assert_eq!(
            season.download_links,
            vec![Some("e1.mp4".to_string()), None, Some("e3.mp4".to_string())]
        );
    }

    #[test]
    fn test_episode_serialization_keys() {
        let ep = episode("e1", vec![download("720p", "e1.mp4")]);
        let json = serde_json::to_value(&ep).unwrap();
        assert_eq!(json["EpisodeTitle"], "Episode e1");
        assert_eq!(json["EpisodeLink"], "e1");
        assert!(json["PreviewsEpisodeLink"].is_null());
        assert!(json["PreviewsEpisodeButtonLink"].is_null());
        assert_eq!(json["Downloads"][0]["DownloadLabel"], "720p");
        assert_eq!(json["Downloads"][0]["DownloadLink"], "e1.mp4");
    }

    #[test]
    fn test_listing_serialization_keys() {
        let season = SeasonListing {
            title: "S1".to_string(),
            link: "s1".to_string(),
            last_episode: Some(EpisodeEntry {
                title: "E2".to_string(),
                link: "e2".to_string(),
            }),
            episodes: vec![
                EpisodeEntry {
                    title: "E2".to_string(),
                    link: "e2".to_string(),
                },
                EpisodeEntry {
                    title: "E1".to_string(),
                    link: "e1".to_string(),
                },
            ],
        };
        let json = serde_json::to_value(&season).unwrap();
        assert_eq!(json["LastEpisode"]["EpisodeTitle"], "E2");
        assert_eq!(json["LastEpisode"]["EpisodeLink"], "e2");
        assert_eq!(json["Episodes"][1]["EpisodeLink"], "e1");
        assert!(json["Episodes"][1].get("link").is_none());

        let serie = SerieListing {
            title: "Show".to_string(),
            link: "s".to_string(),
            seasons: vec![SeasonEntry {
                title: "Season 1".to_string(),
                link: "s1".to_string(),
            }],
        };
        let json = serde_json::to_value(&serie).unwrap();
        assert_eq!(json["Seasons"][0]["SeasonTitle"], "Season 1");
        assert_eq!(json["Seasons"][0]["SeasonLink"], "s1");
    }

    #[test]
    fn test_serie_with_failed_season_serializes_null_slot() {
        let serie = SerieRecord {
            title: "Show".to_string(),
            link: "s".to_string(),
            seasons: vec![
                Some(SeasonRecord::new("S1".to_string(), "s1".to_string(), vec![])),
                None,
            ],
        };
        let json = serde_json::to_value(&serie).unwrap();
        assert_eq!(json["Seasons"].as_array().unwrap().len(), 2);
        assert!(json["Seasons"][1].is_null());
        assert_eq!(json["Seasons"][0]["SeasonTitle"], "S1");
        assert!(json["Seasons"][0]["EpisodeDownloadLinks"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_season_listing_roundtrip() {
        let listing = SeasonListing {
            title: "S1".to_string(),
            link: "s1".to_string(),
            last_episode: Some(EpisodeEntry {
                title: "E2".to_string(),
                link: "e2".to_string(),
            }),
            episodes: vec![],
        };
        let json = serde_json::to_string(&listing).unwrap();
        let back: SeasonListing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }
}
