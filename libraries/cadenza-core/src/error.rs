//! Core error types for Cadenza

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadenza
#[derive(Error, Debug)]
pub enum CoreError {
    /// A URL could not be parsed or is not usable as a track location
    #[error("Invalid track URL: {0}")]
    InvalidUrl(String),

    /// Metadata parsing errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
