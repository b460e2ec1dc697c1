//! Player events
//!
//! Outward notifications consumed by UI, OSD, and scrobbling collaborators.
//! Events are appended in the order the underlying transitions occur and
//! drained FIFO via [`crate::Player::drain_events`]; a superseded pending
//! load never appends anything, so observers never see out-of-order
//! "now playing" announcements.

use cadenza_core::PlaylistItem;
use serde::{Deserialize, Serialize};
use url::Url;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The engine started or resumed playing
    Playing,

    /// The engine paused
    Paused,

    /// Playback stopped; no track is loaded any more
    Stopped,

    /// The playlist ran out of tracks to advance to
    PlaylistFinished,

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },

    /// A manual track change displaced a track that was still loaded
    TrackSkipped {
        /// The displaced item
        item: PlaylistItem,
    },

    /// The position of the current track was changed manually
    Seeked {
        /// Resulting absolute position in milliseconds
        position_ms: u64,
    },

    /// A request to play a track has been processed
    SongChangeRequestProcessed {
        /// URL of the requested track
        url: Url,
        /// Whether the track could be played
        valid: bool,
    },

    /// The engine reported new metadata for the current track
    MetadataChanged {
        /// Current item with merged metadata
        item: PlaylistItem,
    },

    /// A terminal playback error; the controller has given up and stopped
    Error {
        /// Error message
        message: String,
    },
}
