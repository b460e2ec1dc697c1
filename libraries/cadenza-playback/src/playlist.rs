//! Playlist seam
//!
//! The controller treats the playlist as a sequence-position oracle: it asks
//! for items by index and for neighbouring indices, and delegates ordering
//! and shuffle policy entirely. Storage and reordering live elsewhere.

use cadenza_core::PlaylistItem;

/// Sequence-position oracle consumed by the controller
pub trait Playlist: Send {
    /// Item at `index`, or `None` if out of range
    fn item_at(&self, index: usize) -> Option<PlaylistItem>;

    /// Index that follows `current`, or `None` at the end
    ///
    /// Wraparound (repeat-all) is the playlist's decision; returning `None`
    /// means playback finishes.
    fn next_index(&self, current: usize) -> Option<usize>;

    /// Index that precedes `current`, or `None` at the start
    fn previous_index(&self, current: usize) -> Option<usize>;

    /// Reshuffle the remaining play order
    fn reshuffle(&mut self);

    /// Index of the item that played most recently, if any
    ///
    /// Used to resume after a cold start.
    fn last_played_index(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{Playlist, PlaylistItem};
    use cadenza_core::{MetadataBundle, TrackId};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use url::Url;

    /// Linear in-memory playlist for controller tests
    pub struct VecPlaylist {
        pub items: Vec<PlaylistItem>,
        pub last_played: Option<usize>,
        pub reshuffle_calls: usize,
    }

    impl VecPlaylist {
        pub fn new(items: Vec<PlaylistItem>) -> Self {
            Self {
                items,
                last_played: None,
                reshuffle_calls: 0,
            }
        }

        /// Playlist of `n` local file tracks named track0..track(n-1)
        pub fn with_tracks(n: usize) -> Self {
            let items = (0..n).map(|i| test_item(&format!("track{i}"))).collect();
            Self::new(items)
        }
    }

    pub fn test_item(name: &str) -> PlaylistItem {
        PlaylistItem::new(
            TrackId::new(name),
            Url::parse(&format!("file:///music/{name}.mp3")).unwrap(),
            MetadataBundle {
                title: name.to_string(),
                artist: "Test Artist".to_string(),
                album: String::new(),
                length: Some(Duration::from_secs(180)),
            },
        )
    }

    /// Wrapper keeping a [`VecPlaylist`] inspectable after it moved into
    /// the player
    pub struct SharedPlaylist(Arc<Mutex<VecPlaylist>>);

    impl SharedPlaylist {
        pub fn new(inner: VecPlaylist) -> (Self, Arc<Mutex<VecPlaylist>>) {
            let shared = Arc::new(Mutex::new(inner));
            (Self(Arc::clone(&shared)), shared)
        }
    }

    impl Playlist for SharedPlaylist {
        fn item_at(&self, index: usize) -> Option<PlaylistItem> {
            self.0.lock().unwrap().item_at(index)
        }

        fn next_index(&self, current: usize) -> Option<usize> {
            self.0.lock().unwrap().next_index(current)
        }

        fn previous_index(&self, current: usize) -> Option<usize> {
            self.0.lock().unwrap().previous_index(current)
        }

        fn reshuffle(&mut self) {
            self.0.lock().unwrap().reshuffle();
        }

        fn last_played_index(&self) -> Option<usize> {
            self.0.lock().unwrap().last_played_index()
        }
    }

    impl Playlist for VecPlaylist {
        fn item_at(&self, index: usize) -> Option<PlaylistItem> {
            self.items.get(index).cloned()
        }

        fn next_index(&self, current: usize) -> Option<usize> {
            let next = current + 1;
            (next < self.items.len()).then_some(next)
        }

        fn previous_index(&self, current: usize) -> Option<usize> {
            current.checked_sub(1)
        }

        fn reshuffle(&mut self) {
            self.reshuffle_calls += 1;
        }

        fn last_played_index(&self) -> Option<usize> {
            self.last_played
        }
    }
}
