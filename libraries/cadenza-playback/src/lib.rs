//! Cadenza - Playback Control
//!
//! Platform-agnostic playback control for Cadenza.
//!
//! This crate provides:
//! - The playback controller (play/pause/next/previous/stop/seek)
//! - Volume control (0-100%, mute with exact restore)
//! - Stop-after-current-track
//! - Pluggable URL resolution (sync and async handlers)
//! - Consecutive-failure tolerance during auto-advance
//! - A drained event queue for UI/OSD/scrobbler collaborators
//!
//! # Architecture
//!
//! `cadenza-playback` is completely platform-agnostic:
//! - No dependency on any audio backend
//! - No dependency on playlist storage
//! - No dependency on a UI toolkit
//!
//! The audio engine and the playlist are provided via traits; the platform
//! delivers engine notifications into the controller's `handle_*` methods on
//! the owning context and drains [`PlayerEvent`]s back out.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cadenza_playback::{
//!     EngineAdapter, Player, PlayerConfig, Playlist, Result, TrackChange,
//! };
//! use cadenza_core::{MetadataBundle, PlaylistItem, TrackId};
//! use std::time::Duration;
//! use url::Url;
//!
//! // Implement EngineAdapter for your audio backend
//! struct NullEngine;
//!
//! impl EngineAdapter for NullEngine {
//!     fn load(&mut self, _url: &Url, _change: TrackChange) -> Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_volume(&mut self, _level: u8) {}
//!     fn position(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!     fn duration(&self) -> Option<Duration> {
//!         Some(Duration::from_secs(180))
//!     }
//! }
//!
//! // And Playlist for your track store
//! struct SliceList(Vec<PlaylistItem>);
//!
//! impl Playlist for SliceList {
//!     fn item_at(&self, index: usize) -> Option<PlaylistItem> {
//!         self.0.get(index).cloned()
//!     }
//!     fn next_index(&self, current: usize) -> Option<usize> {
//!         (current + 1 < self.0.len()).then_some(current + 1)
//!     }
//!     fn previous_index(&self, current: usize) -> Option<usize> {
//!         current.checked_sub(1)
//!     }
//!     fn reshuffle(&mut self) {}
//! }
//!
//! let items = vec![PlaylistItem::new(
//!     TrackId::new("song1"),
//!     Url::parse("file:///music/song.mp3").unwrap(),
//!     MetadataBundle::with_title("My Song"),
//! )];
//!
//! let mut player = Player::new(
//!     Box::new(NullEngine),
//!     Box::new(SliceList(items)),
//!     PlayerConfig::default(),
//! );
//!
//! player.set_volume(80);
//! player.play_at(0, TrackChange::manual().with_first(), false);
//!
//! // Forward the resulting notifications to UI/OSD/scrobblers
//! for event in player.drain_events() {
//!     println!("{event:?}");
//! }
//! ```
//!
//! # Example: Asynchronous URL Resolution
//!
//! ```rust
//! use cadenza_playback::{Resolution, UrlHandler};
//! use url::Url;
//!
//! // A handler claiming a streaming-service scheme
//! struct StationHandler;
//!
//! impl UrlHandler for StationHandler {
//!     fn can_handle(&self, url: &Url) -> bool {
//!         url.scheme() == "radio"
//!     }
//!
//!     fn resolve(&mut self, _url: &Url) -> Resolution {
//!         // Kick off the lookup, deliver a LoadResult to
//!         // Player::handle_load_result when it completes
//!         Resolution::WillLoadAsynchronously
//!     }
//! }
//! ```

mod engine;
mod error;
mod events;
mod player;
mod playlist;
pub mod types;
mod url_handler;
mod volume;

// Public exports
pub use engine::EngineAdapter;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use playlist::Playlist;
pub use types::{EngineState, PlayerConfig, PreviousBehaviour, TrackChange};
pub use url_handler::{HandlerId, LoadResult, Resolution, UrlHandler, UrlHandlerRegistry};
