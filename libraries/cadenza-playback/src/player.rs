//! Playback controller - core orchestration
//!
//! Owns the single consistent notion of "what is playing now": the current
//! item, the engine's last reported state, the in-flight URL resolution, and
//! the error budget for auto-advance. All entry points must be called from
//! one owning context; engine and URL-handler completions are delivered back
//! into the `handle_*` methods by the embedding platform, never concurrently.

use crate::{
    engine::EngineAdapter,
    events::PlayerEvent,
    playlist::Playlist,
    types::{EngineState, PlayerConfig, PreviousBehaviour, TrackChange},
    url_handler::{HandlerId, LoadResult, Resolution, UrlHandler, UrlHandlerRegistry},
    volume::VolumeControl,
};
use cadenza_core::{MetadataBundle, PlaylistItem};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// One outstanding asynchronous URL resolution
///
/// At most one exists at a time. `token` is compared against the player's
/// generation counter when the result arrives; a mismatch means the load was
/// superseded and the result is discarded without emitting anything.
#[derive(Debug)]
struct PendingLoad {
    url: Url,
    token: u64,
    owner: HandlerId,
}

/// The playback controller
///
/// Mediates between a playlist (sequence-position oracle), an audio engine,
/// and a set of protocol-specific URL handlers, and re-emits simplified
/// notifications for UI/OSD/scrobbler collaborators.
pub struct Player {
    engine: Box<dyn EngineAdapter>,
    playlist: Box<dyn Playlist>,
    handlers: UrlHandlerRegistry,
    config: PlayerConfig,

    // Current-item state
    current_item: Option<PlaylistItem>,
    current_index: Option<usize>,
    last_played: Option<usize>,

    // Engine mirror and controller-local flags
    last_state: EngineState,
    stream_change: TrackChange,
    stop_after: bool,

    // Async resolution
    pending_load: Option<PendingLoad>,
    load_generation: u64,

    // Error budget for auto-advance chains
    errors_received: u32,

    volume: VolumeControl,
    last_pressed_previous: Option<Instant>,

    // Event queue, drained FIFO by the platform
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a new controller around an engine and a playlist
    pub fn new(
        engine: Box<dyn EngineAdapter>,
        playlist: Box<dyn Playlist>,
        config: PlayerConfig,
    ) -> Self {
        let volume = VolumeControl::new(config.volume);
        let mut player = Self {
            engine,
            playlist,
            handlers: UrlHandlerRegistry::new(),
            config,
            current_item: None,
            current_index: None,
            last_played: None,
            last_state: EngineState::Empty,
            stream_change: TrackChange::default(),
            stop_after: false,
            pending_load: None,
            load_generation: 0,
            errors_received: 0,
            volume,
            last_pressed_previous: None,
            pending_events: Vec::new(),
        };
        let level = player.volume.level();
        player.engine.set_volume(level);
        player
    }

    // ===== Playback Control =====

    /// Play the playlist item at `index`
    ///
    /// Out-of-range indices are a silent no-op. With `reshuffle` the
    /// playlist reshuffles its remaining order first; the identity of the
    /// item at `index` is unaffected. Supersedes any pending URL resolution.
    pub fn play_at(&mut self, index: usize, change: TrackChange, reshuffle: bool) {
        if reshuffle {
            self.playlist.reshuffle();
        }
        let Some(item) = self.playlist.item_at(index) else {
            debug!(index, "play_at: index out of range");
            return;
        };

        if change.manual {
            self.stop_after = false;
            // Only a track that actually started playing counts as skipped
            if matches!(self.last_state, EngineState::Playing | EngineState::Paused) {
                if let Some(previous) = self.current_item.clone() {
                    self.emit(PlayerEvent::TrackSkipped { item: previous });
                }
            }
        }

        self.cancel_pending_load();
        self.stream_change = change;
        self.current_index = Some(index);
        self.last_played = Some(index);
        self.current_item = Some(item.clone());

        match self.handlers.resolve(&item.url) {
            Some((owner, Resolution::WillLoadAsynchronously)) => {
                debug!(url = %item.url, "waiting for asynchronous URL resolution");
                self.pending_load = Some(PendingLoad {
                    url: item.url.clone(),
                    token: self.load_generation,
                    owner,
                });
            }
            Some((_, Resolution::Loaded(stream_url))) => {
                self.load_engine(item.url.clone(), stream_url, change);
            }
            Some((_, Resolution::NotApplicable)) | None => {
                self.load_engine(item.url.clone(), item.url, change);
            }
        }
    }

    /// Toggle between playing and paused
    ///
    /// From a stopped engine this resumes the last-played item if one is
    /// known, falls back to the playlist's last-played position, then to the
    /// first item; with nothing playable it is a no-op.
    pub fn play_pause(&mut self) {
        match self.last_state {
            EngineState::Playing => self.engine.pause(),
            EngineState::Paused => self.engine.play(),
            EngineState::Empty | EngineState::Idle | EngineState::Error => {
                let target = self
                    .current_index
                    .or(self.last_played)
                    .or_else(|| self.playlist.last_played_index())
                    .or_else(|| self.playlist.item_at(0).map(|_| 0));
                match target {
                    Some(index) => {
                        self.play_at(index, TrackChange::manual().with_first(), false);
                    }
                    None => debug!("play_pause: nothing to play"),
                }
            }
        }
    }

    /// Start or resume playback
    ///
    /// Unlike [`play_pause`](Self::play_pause) this never pauses: it resumes
    /// a paused track, is a no-op while already playing, and otherwise
    /// cold-starts like `play_pause`. Intended for bindings that need a
    /// deterministic direction (remote controls, media keys).
    pub fn play(&mut self) {
        match self.last_state {
            EngineState::Playing => {}
            EngineState::Paused => self.engine.play(),
            EngineState::Empty | EngineState::Idle | EngineState::Error => self.play_pause(),
        }
    }

    /// Pause playback
    ///
    /// A no-op unless a track is playing; never resumes or starts playback.
    pub fn pause(&mut self) {
        if self.last_state == EngineState::Playing {
            self.engine.pause();
        }
    }

    /// Skip to the next playlist item
    pub fn next(&mut self) {
        // A manual skip overrides a pending stop-after-current
        self.stop_after = false;
        self.next_internal(TrackChange::manual());
    }

    /// Go back one playlist position, or restart the current track
    ///
    /// Restarts when the policy is `Restart`, or when this press follows a
    /// previous one within the grace window (rapid double-press). At the
    /// start of the playlist, moving back is a no-op.
    pub fn previous(&mut self) {
        let restart = self.previous_would_restart();
        self.last_pressed_previous = Some(Instant::now());

        if restart && self.current_item.is_some() {
            self.restart_current();
            return;
        }

        let Some(index) = self
            .current_index
            .and_then(|i| self.playlist.previous_index(i))
        else {
            debug!("previous: already at the start of the playlist");
            return;
        };
        self.play_at(index, TrackChange::manual(), false);
    }

    /// Whether a "previous" press right now would restart the current track
    pub fn previous_would_restart(&self) -> bool {
        match self.config.previous_behaviour {
            PreviousBehaviour::Restart => true,
            PreviousBehaviour::DontRestart => self
                .last_pressed_previous
                .is_some_and(|t| t.elapsed() < self.config.previous_grace),
        }
    }

    /// Stop playback
    ///
    /// With `stop_after` set while a track is playing or paused, playback is
    /// not interrupted; the current track is allowed to finish and the stop
    /// happens on its natural end instead of advancing.
    pub fn stop(&mut self, stop_after: bool) {
        let interruptible = matches!(
            self.last_state,
            EngineState::Playing | EngineState::Paused
        );
        if stop_after && interruptible && self.current_item.is_some() {
            debug!("arming stop-after-current");
            self.stop_after = true;
            return;
        }
        self.stop_internal();
    }

    // ===== Seek =====

    /// Seek to an absolute position in the current track
    ///
    /// Clamped to the track duration. A no-op without a current track or
    /// when the duration is unknown (live streams).
    pub fn seek_to(&mut self, position: Duration) {
        if self.current_item.is_none() {
            return;
        }
        let Some(duration) = self.engine.duration() else {
            debug!("seek ignored: track duration unknown");
            return;
        };
        let target = position.min(duration);
        if let Err(e) = self.engine.seek(target) {
            warn!(error = %e, "seek failed");
            return;
        }
        self.emit(PlayerEvent::Seeked {
            position_ms: target.as_millis() as u64,
        });
    }

    /// Seek forward by the configured step
    pub fn seek_forward(&mut self) {
        self.seek_to(self.engine.position() + self.config.seek_step);
    }

    /// Seek backward by the configured step
    pub fn seek_backward(&mut self) {
        let target = self.engine.position().saturating_sub(self.config.seek_step);
        self.seek_to(target);
    }

    // ===== Volume =====

    /// Set the volume, clamped to 0-100
    pub fn set_volume(&mut self, level: u8) {
        let level = self.volume.set_level(level);
        self.apply_volume(level);
    }

    /// Raise the volume by the configured step
    pub fn volume_up(&mut self) {
        let level = self.volume.step_up(self.config.volume_step);
        self.apply_volume(level);
    }

    /// Lower the volume by the configured step
    pub fn volume_down(&mut self) {
        let level = self.volume.step_down(self.config.volume_step);
        self.apply_volume(level);
    }

    /// Toggle mute; un-muting restores the exact pre-mute volume
    pub fn mute(&mut self) {
        let level = self.volume.toggle_mute();
        self.apply_volume(level);
    }

    /// Current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== URL handlers =====

    /// Register a URL handler; handlers are consulted in registration order
    pub fn register_url_handler(&mut self, handler: Box<dyn UrlHandler>) -> HandlerId {
        self.handlers.register(handler)
    }

    /// Unregister a URL handler
    ///
    /// If the handler owns the in-flight pending load, that load is
    /// cancelled rather than left orphaned.
    pub fn unregister_url_handler(&mut self, id: HandlerId) {
        self.handlers.unregister(id);
        if self.pending_load.as_ref().is_some_and(|p| p.owner == id) {
            debug!("unregistered handler owned the pending load, cancelling");
            self.cancel_pending_load();
        }
    }

    // ===== Platform callbacks =====

    /// Deliver the completion of an asynchronous URL resolution
    ///
    /// Results for superseded loads are fully suppressed: no state changes
    /// and no events.
    pub fn handle_load_result(&mut self, result: LoadResult) {
        let Some(pending) = self.pending_load.as_ref() else {
            debug!(url = %result.original_url, "discarding load result with no pending load");
            return;
        };
        if pending.url != result.original_url || pending.token != self.load_generation {
            debug!(url = %result.original_url, "discarding superseded load result");
            return;
        }
        self.pending_load = None;

        match result.result {
            Ok(stream_url) => {
                debug!(url = %result.original_url, stream = %stream_url, "URL resolved");
                let change = self.stream_change;
                self.load_engine(result.original_url, stream_url, change);
            }
            Err(message) => {
                warn!(url = %result.original_url, %message, "URL resolution failed");
                self.handle_playback_failure(result.original_url);
            }
        }
    }

    /// Deliver an engine state change
    pub fn handle_engine_state(&mut self, state: EngineState) {
        let previous = self.last_state;
        self.last_state = state;

        match state {
            EngineState::Playing => {
                // A successful start clears the auto-advance error budget
                self.errors_received = 0;
                self.emit(PlayerEvent::Playing);
            }
            EngineState::Paused => self.emit(PlayerEvent::Paused),
            EngineState::Empty | EngineState::Idle => {
                if matches!(previous, EngineState::Playing | EngineState::Paused) {
                    self.emit(PlayerEvent::Stopped);
                }
            }
            EngineState::Error => {
                if let Some(item) = self.current_item.clone() {
                    warn!(url = %item.url, "engine reported an error for the current track");
                    self.handle_playback_failure(item.url);
                }
            }
        }
    }

    /// Deliver the engine's natural end-of-track signal
    pub fn handle_track_ended(&mut self) {
        debug!("track ended");
        self.next_internal(TrackChange::auto());
    }

    /// Deliver the engine's "track about to end" signal
    ///
    /// Hints the next track's URL to the engine for a gapless transition.
    /// Skipped when stopping after the current track or when the next URL
    /// needs resolution first.
    pub fn handle_track_about_to_end(&mut self) {
        if self.stop_after {
            return;
        }
        let Some(next) = self
            .current_index
            .and_then(|i| self.playlist.next_index(i))
        else {
            return;
        };
        let Some(item) = self.playlist.item_at(next) else {
            return;
        };
        if self.handlers.would_handle(&item.url) {
            return;
        }
        if let Err(e) = self.engine.preload(&item.url) {
            debug!(url = %item.url, error = %e, "gapless preload failed");
        }
    }

    /// Deliver metadata the engine picked up mid-stream
    ///
    /// Merged into the controller's copy of the current item; the playlist's
    /// own item is untouched.
    pub fn handle_metadata(&mut self, bundle: &MetadataBundle) {
        let Some(item) = self.current_item.as_mut() else {
            return;
        };
        item.metadata.merge(bundle);
        let item = item.clone();
        self.emit(PlayerEvent::MetadataChanged { item });
    }

    /// Replace the tunable configuration
    ///
    /// The live volume level is user state, not configuration; it is kept.
    pub fn reload_config(&mut self, config: PlayerConfig) {
        self.config = config;
    }

    // ===== State queries =====

    /// Last state reported by the engine
    pub fn state(&self) -> EngineState {
        self.last_state
    }

    /// Whether a URL resolution is in flight
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// The item currently loaded or playing
    pub fn current_item(&self) -> Option<&PlaylistItem> {
        self.current_item.as_ref()
    }

    /// Playlist position of the current item
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    // ===== Events =====

    /// Drain all pending events, in emission order
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Advance to the next item, honoring the armed stop-after flag
    fn next_internal(&mut self, change: TrackChange) {
        if self.handle_stop_after() {
            return;
        }
        let next = self
            .current_index
            .and_then(|i| self.playlist.next_index(i));
        match next {
            Some(index) => self.play_at(index, change, false),
            None => {
                if self.current_index.is_some() {
                    debug!("playlist finished");
                    self.emit(PlayerEvent::PlaylistFinished);
                    self.stop_internal();
                }
            }
        }
    }

    /// Returns true if we were supposed to stop after this track
    fn handle_stop_after(&mut self) -> bool {
        if !self.stop_after {
            return false;
        }
        debug!("stop-after-current armed, stopping");
        self.stop_internal();
        true
    }

    fn stop_internal(&mut self) {
        self.cancel_pending_load();
        self.stop_after = false;
        self.engine.stop();
        self.current_item = None;
        self.current_index = None;
        // The engine will report Empty/Idle itself; recording Idle here
        // keeps that report from emitting a second Stopped
        self.last_state = EngineState::Idle;
        self.emit(PlayerEvent::Stopped);
    }

    /// Hand a playable URL to the engine and report the request outcome
    ///
    /// `original` is the URL the request was made for and the one reported
    /// outward; `stream` is what the engine actually loads.
    fn load_engine(&mut self, original: Url, stream: Url, change: TrackChange) {
        if let Err(e) = self.engine.load(&stream, change) {
            warn!(url = %stream, error = %e, "engine refused to load track");
            self.handle_playback_failure(original);
            return;
        }
        self.engine.play();
        self.emit(PlayerEvent::SongChangeRequestProcessed {
            url: original,
            valid: true,
        });
    }

    /// Count a playback failure and either keep advancing or give up
    ///
    /// Below the error threshold the chain continues with the next item; at
    /// the threshold playback stops with a single terminal error.
    fn handle_playback_failure(&mut self, url: Url) {
        self.emit(PlayerEvent::SongChangeRequestProcessed { url, valid: false });
        self.errors_received += 1;
        if self.errors_received >= self.config.max_consecutive_errors {
            warn!(
                errors = self.errors_received,
                "too many consecutive playback failures, giving up"
            );
            self.emit(PlayerEvent::Error {
                message: format!(
                    "Giving up after {} consecutive playback failures",
                    self.errors_received
                ),
            });
            self.stop_internal();
        } else {
            self.next_internal(TrackChange::auto().with_first());
        }
    }

    fn restart_current(&mut self) {
        debug!("restarting current track");
        if let Err(e) = self.engine.seek(Duration::ZERO) {
            warn!(error = %e, "failed to restart track");
            return;
        }
        self.emit(PlayerEvent::Seeked { position_ms: 0 });
    }

    fn cancel_pending_load(&mut self) {
        if self.pending_load.take().is_some() {
            self.load_generation = self.load_generation.wrapping_add(1);
            debug!("superseded pending URL resolution");
        }
    }

    fn apply_volume(&mut self, level: u8) {
        self.engine.set_volume(level);
        self.emit(PlayerEvent::VolumeChanged { level });
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}
