//! Engine adapter seam
//!
//! Abstracts the audio backend behind load/play/pause/stop/seek/volume
//! primitives. Implementations own decoding and output; the controller only
//! drives them and mirrors the state they report.
//!
//! Engines deliver their notifications asynchronously: the embedding
//! platform forwards `StateChanged` and `MetadataReceived` (plus track-end
//! signals) into [`crate::Player::handle_engine_state`],
//! [`crate::Player::handle_metadata`], [`crate::Player::handle_track_ended`]
//! and [`crate::Player::handle_track_about_to_end`] on the controller's
//! owning context.

use crate::error::Result;
use crate::types::TrackChange;
use std::time::Duration;
use url::Url;

/// Audio backend contract
///
/// Implementations are selected at startup and swappable at runtime; the
/// controller holds exactly one and drives it exclusively.
pub trait EngineAdapter: Send {
    /// Load a track for playback
    ///
    /// `change` tells the engine why the transition happened so it can pick
    /// a gapless transition or a fresh load.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be accepted at all. Failures that
    /// only surface once playback is attempted are reported asynchronously
    /// via an [`crate::EngineState::Error`] state change instead.
    fn load(&mut self, url: &Url, change: TrackChange) -> Result<()>;

    /// Start or resume playback of the loaded track
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Stop playback and unload the current track
    fn stop(&mut self);

    /// Seek within the current track
    ///
    /// # Errors
    /// Returns an error if the engine cannot seek the current stream.
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set the output volume (0-100)
    fn set_volume(&mut self, level: u8);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Duration of the loaded track, if known
    ///
    /// Live streams have no duration; seeking is refused for them.
    fn duration(&self) -> Option<Duration>;

    /// Hint that `url` will be wanted next, for gapless transitions
    ///
    /// Engines without gapless support ignore this.
    fn preload(&mut self, url: &Url) -> Result<()> {
        let _ = url;
        Ok(())
    }
}
