/// A named, ordered playlist of videos
///
/// Members are stored as video ids; a video appears at most once.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name, in the casing it was created with
    pub name: String,

    /// Member video ids (insertion order)
    videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: Vec::new(),
        }
    }

    /// Append a video, returning false if it is already a member
    pub fn add(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.videos.push(video_id.to_string());
        true
    }

    /// Remove a video, returning false if it was not a member
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every video
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Whether a video is a member
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Member ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.videos
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
