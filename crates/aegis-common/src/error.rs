//! Error types for the Aegis HUD.
//!
//! Nothing on the per-frame draw path returns these. They surface from
//! configuration loading and snapshot ingestion, before any frame is drawn.

use thiserror::Error;

use crate::ids::JobId;

/// Top-level error type for Aegis operations.
#[derive(Debug, Error)]
pub enum HudError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Frame snapshot could not be ingested
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration defects, reported at load time rather than mid-frame.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A known job has no entry in the job color table
    #[error("No color set configured for job {job}")]
    MissingJobColor {
        /// The job lacking a color entry
        job: JobId,
    },

    /// A bar slot has an unusable size
    #[error("Invalid {role} bar: {reason}")]
    InvalidBar {
        /// Bar role name
        role: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The configuration file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Result type alias for Aegis operations.
pub type HudResult<T> = Result<T, HudError>;
