//! Verbosity-gated logging
//!
//! [`ScrapeLogger`] is handed to the walker and the aggregators explicitly.
//! When disabled it drops every message; when enabled it forwards to
//! `tracing`, so the host application decides where the output goes.

/// Logger passed down the scraping call chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeLogger {
    enabled: bool,
}

impl ScrapeLogger {
    /// Create a logger; `enabled = false` silences it completely.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A logger that never emits anything.
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Whether messages are forwarded to `tracing`.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Progress message.
    pub fn info(&self, message: &str) {
        if self.enabled {
            tracing::info!("{}", message);
        }
    }

    /// A step finished successfully.
    pub fn success(&self, message: &str) {
        if self.enabled {
            tracing::info!(outcome = "success", "{}", message);
        }
    }

    /// Something looked off but scraping continues.
    pub fn warn(&self, message: &str) {
        if self.enabled {
            tracing::warn!("{}", message);
        }
    }

    /// A step failed; `cause` is the underlying error.
    pub fn error(&self, message: &str, cause: &dyn std::fmt::Display) {
        if self.enabled {
            tracing::error!(cause = %cause, "{}", message);
        }
    }
}

impl Default for ScrapeLogger {
    fn default() -> Self {
        Self::new(true)
    }
}
