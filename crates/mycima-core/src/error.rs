//! Error types for the MyCima scraper
//!
//! Internal operations return [`Result`]; the public scraper facade turns
//! every error into `None` after logging it. MyCimaError implements
//! Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for MyCima scraper operations
#[derive(Error, Debug)]
pub enum MyCimaError {
    /// Transport-level failure (unreachable host, broken connection, timeout)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Requested page was not found (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// A mandatory selector could not be queried at all
    #[error("Invalid selector for field '{field}': {selector}")]
    InvalidSelector { field: String, selector: String },

    /// A field was requested that the extraction did not produce
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// URL could not be normalized
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Serialize MyCimaError as a string for Tauri compatibility
impl Serialize for MyCimaError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for MyCima scraper operations
pub type Result<T> = std::result::Result<T, MyCimaError>;
