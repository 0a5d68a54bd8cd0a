//! Data model for the video catalog
//!
//! Videos, the catalog that owns them, and playlists that reference
//! them by id.

mod video;
mod playlist;
mod catalog;

pub use video::{Video, DEFAULT_FLAG_REASON};
pub use playlist::Playlist;
pub use catalog::VideoCatalog;
