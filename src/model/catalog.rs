use super::Video;
use std::collections::HashMap;

/// The fixed set of videos known to the player
///
/// Videos are inserted while loading and never removed. Their flag and
/// pause state can still be changed through `get_mut`.
#[derive(Debug, Clone)]
pub struct VideoCatalog {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,
}

impl VideoCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the catalog
    ///
    /// Returns false and keeps the existing entry if the id is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.videos.contains_key(video.id()) {
            return false;
        }
        self.videos.insert(video.id().to_string(), video);
        true
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Get a video by ID for flag or pause changes
    ///
    /// Kept inside the crate so the map key always equals the video's id.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// All videos sorted by title, then id
    pub fn sorted(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort();
        videos
    }

    /// Total number of videos, flagged ones included
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoCatalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}
