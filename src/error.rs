//! Domain error types for rolo
//!
//! Provides structured error types for different domains:
//! - `SelectorError` for cursor construction
//! - `RosterError` for contact file loading
//! - `RoloError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for rolo
#[derive(Debug, Error)]
pub enum RoloError {
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to selector construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Cannot create a selector over an empty list")]
    EmptyList,
}

/// Errors related to loading a contact roster file
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file {}: {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse roster file {}: {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),

    #[error("Roster file {} contains no contacts", .0.display())]
    NoContacts(PathBuf),
}

/// Result type alias for RoloError
pub type Result<T> = std::result::Result<T, RoloError>;

/// Result type alias for SelectorError
pub type SelectorResult<T> = std::result::Result<T, SelectorError>;

/// Result type alias for RosterError
pub type RosterResult<T> = std::result::Result<T, RosterError>;

// Conversion from anyhow::Error for backward compatibility
impl From<anyhow::Error> for RoloError {
    fn from(err: anyhow::Error) -> Self {
        RoloError::Other(err.to_string())
    }
}

impl From<String> for RoloError {
    fn from(msg: String) -> Self {
        RoloError::Other(msg)
    }
}

impl From<&str> for RoloError {
    fn from(msg: &str) -> Self {
        RoloError::Other(msg.to_string())
    }
}
