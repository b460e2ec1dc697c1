//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The engine rejected a load request
    #[error("Engine failed to load {url}: {message}")]
    EngineLoad {
        /// URL the engine was asked to load
        url: url::Url,
        /// Engine-reported reason
        message: String,
    },

    /// The engine rejected a seek request
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(std::time::Duration),

    /// A URL handler failed to resolve a track
    #[error("Failed to resolve {url}: {message}")]
    Resolution {
        /// Original (unresolved) URL
        url: url::Url,
        /// Handler-reported reason
        message: String,
    },

    /// Generic engine error
    #[error("Engine error: {0}")]
    Engine(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
