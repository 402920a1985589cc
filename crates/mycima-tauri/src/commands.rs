//! Tauri commands for the MyCima Scraper
//!
//! This module contains all Tauri commands that can be invoked from the
//! frontend. The scraper never fails with an error; a page that cannot be
//! scraped comes back to the frontend as `null`.

use tauri::State;

use crate::ScraperState;
use mycima_core::{EpisodeRecord, SeasonListing, SeasonRecord, SerieListing, SerieRecord};

/// Get a series title and its season links.
///
/// # Arguments
/// * `url` - Series page URL
#[tauri::command]
pub async fn get_serie(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Option<SerieListing>, String> {
    let scraper = state.scraper().lock().await;
    Ok(scraper.get_serie(&url).await)
}

/// Get a season title and its listed episode links.
///
/// # Arguments
/// * `url` - Season page URL
#[tauri::command]
pub async fn get_season(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Option<SeasonListing>, String> {
    let scraper = state.scraper().lock().await;
    Ok(scraper.get_season(&url).await)
}

/// Get a single episode with its download links.
///
/// # Arguments
/// * `url` - Episode page URL
#[tauri::command]
pub async fn get_episode(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Option<EpisodeRecord>, String> {
    let scraper = state.scraper().lock().await;
    Ok(scraper.get_episode(&url).await)
}

/// Get a full season by walking back from its latest episode.
///
/// # Arguments
/// * `url` - Season page URL
/// * `start` - Episode to start from (default: latest episode)
/// * `end` - Oldest episode to include (default: first episode)
#[tauri::command]
pub async fn get_season_by_previews(
    state: State<'_, ScraperState>,
    url: String,
    start: Option<String>,
    end: Option<String>,
) -> Result<Option<SeasonRecord>, String> {
    let scraper = state.scraper().lock().await;
    Ok(scraper
        .get_season_by_previews(&url, start.as_deref(), end.as_deref())
        .await)
}

/// Get a full series, walking every season in site order.
///
/// # Arguments
/// * `url` - Series page URL
#[tauri::command]
pub async fn get_serie_by_previews(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Option<SerieRecord>, String> {
    let scraper = state.scraper().lock().await;
    Ok(scraper.get_serie_by_previews(&url).await)
}
