//! Track and metadata types shared across the playback stack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for one track
///
/// Also the payload an audio engine reports mid-stream (e.g. icecast title
/// updates), which is why every field is optional or may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataBundle {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track length, if known
    pub length: Option<Duration>,
}

impl MetadataBundle {
    /// Create a bundle carrying only a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Merge another bundle into this one
    ///
    /// Non-empty fields of `other` replace the corresponding fields here;
    /// empty fields leave the existing values untouched. Used when an engine
    /// reports partial metadata mid-stream.
    pub fn merge(&mut self, other: &MetadataBundle) {
        if !other.title.is_empty() {
            self.title.clone_from(&other.title);
        }
        if !other.artist.is_empty() {
            self.artist.clone_from(&other.artist);
        }
        if !other.album.is_empty() {
            self.album.clone_from(&other.album);
        }
        if other.length.is_some() {
            self.length = other.length;
        }
    }
}

/// Handle to one track within a playlist ordering
///
/// Shared between the playlist and the playback controller. The controller
/// never mutates a `PlaylistItem`, it only swaps which item is current;
/// cloning is cheap enough to treat instances as values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Unique track identifier
    pub id: TrackId,

    /// Track location; may be abstract (e.g. a streaming-service scheme)
    /// and require resolution before the engine can load it
    pub url: Url,

    /// Track metadata
    pub metadata: MetadataBundle,
}

impl PlaylistItem {
    /// Create a new playlist item
    pub fn new(id: TrackId, url: Url, metadata: MetadataBundle) -> Self {
        Self { id, url, metadata }
    }
}
