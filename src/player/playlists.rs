//! Playlist commands
//!
//! Playlists are looked up case-insensitively. Messages echo the name as
//! the caller typed it.

use super::VideoPlayer;
use crate::model::Playlist;

impl VideoPlayer {
    /// Playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Create an empty playlist; names collide ignoring case
    pub fn create_playlist(&mut self, name: &str) -> Vec<String> {
        let key = name.to_lowercase();
        if self.playlists.contains_key(&key) {
            return vec![
                "Cannot create playlist: A playlist with the same name already exists".to_string(),
            ];
        }

        self.playlists.insert(key, Playlist::new(name.to_string()));
        log::debug!("Created playlist {:?}", name);
        vec![format!("Successfully created new playlist: {}", name)]
    }

    /// Add a video to a playlist
    ///
    /// A missing playlist is reported before a missing video.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Vec<String> {
        let Some(playlist) = self.playlists.get_mut(&name.to_lowercase()) else {
            return vec![format!("Cannot add video to {}: Playlist does not exist", name)];
        };
        let Some(video) = self.catalog.get(video_id) else {
            return vec![format!("Cannot add video to {}: Video does not exist", name)];
        };
        if video.is_flagged() {
            return vec![format!(
                "Cannot add video to {}: Video is currently flagged (reason: {})",
                name,
                video.flag_reason()
            )];
        }

        if playlist.add(video.id()) {
            vec![format!("Added video to {}: {}", name, video.title())]
        } else {
            vec![format!("Cannot add video to {}: Video already added", name)]
        }
    }

    /// Playlist names in key order, with their original casing
    pub fn show_all_playlists(&self) -> Vec<String> {
        if self.playlists.is_empty() {
            return vec!["No playlists exist yet".to_string()];
        }

        let mut lines = vec!["Showing all playlists:".to_string()];
        lines.extend(self.playlists.values().map(|playlist| playlist.name.clone()));
        lines
    }

    /// Members of a playlist in the order they were added
    pub fn show_playlist(&self, name: &str) -> Vec<String> {
        let Some(playlist) = self.playlist(name) else {
            return vec![format!(
                "Cannot show playlist {}: Playlist does not exist",
                name
            )];
        };

        let mut lines = vec![format!("Showing playlist: {}", name)];
        if playlist.is_empty() {
            lines.push("No videos here yet".to_string());
        } else {
            lines.extend(
                playlist
                    .video_ids()
                    .iter()
                    .filter_map(|id| self.catalog.get(id))
                    .map(|video| video.describe()),
            );
        }
        lines
    }

    /// Remove a video from a playlist
    ///
    /// A missing playlist is reported before a missing video.
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Vec<String> {
        let Some(playlist) = self.playlists.get_mut(&name.to_lowercase()) else {
            return vec![format!(
                "Cannot remove video from {}: Playlist does not exist",
                name
            )];
        };
        let Some(video) = self.catalog.get(video_id) else {
            return vec![format!(
                "Cannot remove video from {}: Video does not exist",
                name
            )];
        };

        if playlist.remove(video.id()) {
            vec![format!("Removed video from {}: {}", name, video.title())]
        } else {
            vec![format!(
                "Cannot remove video from {}: Video is not in playlist",
                name
            )]
        }
    }

    /// Empty a playlist without deleting it
    pub fn clear_playlist(&mut self, name: &str) -> Vec<String> {
        match self.playlists.get_mut(&name.to_lowercase()) {
            Some(playlist) => {
                playlist.clear();
                vec![format!("Successfully removed all videos from {}", name)]
            }
            None => vec![format!(
                "Cannot clear playlist {}: Playlist does not exist",
                name
            )],
        }
    }

    /// Delete a playlist and its membership
    pub fn delete_playlist(&mut self, name: &str) -> Vec<String> {
        match self.playlists.remove(&name.to_lowercase()) {
            Some(_) => {
                log::debug!("Deleted playlist {:?}", name);
                vec![format!("Deleted playlist: {}", name)]
            }
            None => vec![format!(
                "Cannot delete playlist {}: Playlist does not exist",
                name
            )],
        }
    }
}
