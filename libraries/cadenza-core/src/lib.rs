//! Cadenza Core
//!
//! Shared types for the Cadenza playback stack.
//!
//! This crate defines the data that crosses component boundaries:
//! - **`PlaylistItem`**: a handle to one track's identity, URL, and metadata
//! - **`MetadataBundle`**: the metadata payload reported by an audio engine
//! - **`TrackId`**: opaque track identifier
//! - **Error handling**: unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use cadenza_core::{MetadataBundle, PlaylistItem, TrackId};
//! use url::Url;
//!
//! let item = PlaylistItem::new(
//!     TrackId::new("track-1"),
//!     Url::parse("file:///music/song.flac").unwrap(),
//!     MetadataBundle::with_title("My Song"),
//! );
//!
//! assert_eq!(item.metadata.title, "My Song");
//! ```

mod error;
mod types;

pub use error::{CoreError, Result};
pub use types::{MetadataBundle, PlaylistItem, TrackId};
