//! MyCima Scraper Tauri Integration
//!
//! This crate provides Tauri commands for integrating the MyCima scraper
//! into Tauri 2.0 applications.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mycima_tauri::ScraperState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(ScraperState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             mycima_tauri::commands::get_serie,
//!             mycima_tauri::commands::get_season,
//!             mycima_tauri::commands::get_episode,
//!             mycima_tauri::commands::get_season_by_previews,
//!             mycima_tauri::commands::get_serie_by_previews,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `get_serie` - Series title and season links
//! - `get_season` - Season title and listed episode links
//! - `get_episode` - Single episode with downloads
//! - `get_season_by_previews` - Full season walked from its latest episode
//! - `get_serie_by_previews` - Full series, every season walked

pub mod commands;

use std::sync::Arc;
use tokio::sync::Mutex;

use mycima_core::{MyCimaClient, MyCimaScraper, ScraperConfig};

/// Thread-safe wrapper for MyCimaScraper.
///
/// Commands lock the scraper for the whole call, so walks triggered from the
/// frontend run one after another, never concurrently.
pub struct ScraperState {
    scraper: Arc<Mutex<MyCimaScraper>>,
}

impl ScraperState {
    /// Create a new ScraperState with default configuration.
    ///
    /// # Errors
    /// Returns an error string if the scraper cannot be created.
    pub fn new() -> Result<Self, String> {
        let scraper = MyCimaScraper::new().map_err(|e| e.to_string())?;
        Ok(Self::from_scraper(scraper))
    }

    /// Create a ScraperState with a custom configuration, e.g. to silence logging.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn with_config(config: ScraperConfig) -> Result<Self, String> {
        let client = MyCimaClient::new().map_err(|e| e.to_string())?;
        Ok(Self::from_scraper(MyCimaScraper::with_fetcher(client, config)))
    }

    fn from_scraper(scraper: MyCimaScraper) -> Self {
        Self {
            scraper: Arc::new(Mutex::new(scraper)),
        }
    }

    /// Get a reference to the inner scraper.
    pub fn scraper(&self) -> &Arc<Mutex<MyCimaScraper>> {
        &self.scraper
    }
}
