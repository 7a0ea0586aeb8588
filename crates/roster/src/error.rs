//! Error types for the roster crate.
//!
//! Only the crate's edges can fail: reading configuration and parsing text.
//! Table operations degrade to dropping, clamping or ignoring input instead.

use roster_seeker::SeekerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// A configuration value is out of range or unparseable.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Seeker(#[from] SeekerError),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
