//! MyCima Scraper Core Library
//!
//! This crate scrapes machine-readable catalogs from MyCima: series,
//! seasons, episodes and their download mirrors.
//!
//! # Features
//! - Single-page extraction of series, season and episode pages
//! - Backward chain walk rebuilding a season's full episode list from its
//!   most recent episode, optionally bounded to a range
//! - Whole-series aggregation, one season after another
//! - Failures never surface as errors: they are logged and returned as `None`

pub mod aggregate;
pub mod client;
pub mod error;
pub mod logger;
pub mod parser;
pub mod scraper;
pub mod selectors;
pub mod source;
pub mod types;
pub mod url;
pub mod walker;

// Re-export main types for convenience
pub use client::{ClientConfig, MyCimaClient, PageFetcher};
pub use error::{MyCimaError, Result};
pub use logger::ScrapeLogger;
pub use scraper::{MyCimaScraper, ScraperConfig};
pub use selectors::SiteSelectors;
pub use source::CatalogSource;
pub use types::{
    DownloadRecord, EpisodeEntry, EpisodeRecord, SeasonEntry, SeasonListing, SeasonRecord,
    SerieListing, SerieRecord,
};
pub use walker::WalkOptions;
