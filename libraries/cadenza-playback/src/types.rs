//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Last state reported by the audio engine
///
/// The controller mirrors this verbatim; its own semantic state (loading,
/// stopping after the current track) is derived from controller-local flags
/// rather than stored in a second place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Nothing has ever been loaded
    Empty,

    /// Engine has a track but is not playing it
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// The engine failed to play the loaded track
    Error,
}

/// Why a track transition occurred
///
/// Consumed by the engine to decide between a gapless transition and a fresh
/// load, and by observers to distinguish user-initiated skips from natural
/// progression. Flags are orthogonal and may be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackChange {
    /// The user asked for this transition
    pub manual: bool,

    /// Natural progression (end of track, auto-advance)
    pub auto: bool,

    /// First load of a playback run, or a fresh load across a gap;
    /// engines should not attempt a gapless transition
    pub first: bool,
}

impl TrackChange {
    /// A user-initiated transition
    pub fn manual() -> Self {
        Self {
            manual: true,
            ..Self::default()
        }
    }

    /// A natural (automatic) transition
    pub fn auto() -> Self {
        Self {
            auto: true,
            ..Self::default()
        }
    }

    /// Mark this transition as a fresh load
    pub fn with_first(mut self) -> Self {
        self.first = true;
        self
    }
}

/// Policy for the "previous" command
///
/// Serialized tags are stable: they are persisted in user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviousBehaviour {
    /// A press moves back one position; a rapid second press restarts the
    /// current track instead
    #[serde(rename = "dont_restart")]
    DontRestart,

    /// A press always restarts the current track first
    #[serde(rename = "restart")]
    Restart,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// Step applied by volume up/down (default: 5)
    pub volume_step: u8,

    /// Step applied by seek forward/backward (default: 5 s)
    pub seek_step: Duration,

    /// Window within which a second "previous" press restarts the current
    /// track (default: 2 s)
    pub previous_grace: Duration,

    /// Consecutive playback failures tolerated during auto-advance before
    /// the controller stops and reports a terminal error (default: 5)
    pub max_consecutive_errors: u32,

    /// "Previous" command policy (default: `DontRestart`)
    pub previous_behaviour: PreviousBehaviour,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            volume_step: 5,
            seek_step: Duration::from_secs(5),
            previous_grace: Duration::from_secs(2),
            max_consecutive_errors: 5,
            previous_behaviour: PreviousBehaviour::DontRestart,
        }
    }
}
