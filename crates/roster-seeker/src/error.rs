//! Error types for the seeker crate.

use thiserror::Error;

/// Errors raised at the edges of the engine.
///
/// Matching, sorting and paging never fail; these cover parsing the text a
/// caller hands in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeekerError {
    /// A field name that no column answers to.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Page number text that is blank or not a number.
    #[error("invalid page number: {0:?}")]
    InvalidPageInput(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
