//! Error types for the configuration boundary.
//!
//! The scheduling core itself reports nothing as an error: exhaustion,
//! starvation, and unknown identifiers are all in-band absences. Only
//! parsing and validating configuration can fail.

use thiserror::Error;

/// Errors produced while loading simulation configuration.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration could not be parsed at all.
    #[error("config parse error: {0}")]
    ParseConfig(#[from] serde_json::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
