//! Playback state and command dispatch

use crate::command::{Command, HELP_TEXT};
use crate::config::PlayerConfig;
use crate::model::{Playlist, VideoCatalog, DEFAULT_FLAG_REASON};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// The video player: catalog, playlists and the current slot
///
/// Every operation returns the lines to show the user. Invalid requests
/// produce a warning line and leave the state unchanged.
pub struct VideoPlayer {
    pub(super) catalog: VideoCatalog,

    /// Playlists keyed by lowercased name
    pub(super) playlists: BTreeMap<String, Playlist>,

    /// Id of the loaded video, playing or paused. Never a flagged video.
    pub(super) current: Option<String>,

    /// Ids listed by the last search, awaiting a numeric choice
    pub(super) pending_selection: Option<Vec<String>>,

    rng: StdRng,
}

impl VideoPlayer {
    /// Create a player over a catalog with an OS-seeded random source
    pub fn new(catalog: VideoCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a player honouring the configured seed
    pub fn with_config(catalog: VideoCatalog, config: &PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(catalog, rng)
    }

    fn with_rng(catalog: VideoCatalog, rng: StdRng) -> Self {
        Self {
            catalog,
            playlists: BTreeMap::new(),
            current: None,
            pending_selection: None,
            rng,
        }
    }

    /// The catalog this player was built over
    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    /// Id of the loaded video, if any
    pub fn current_video_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Run a parsed command
    ///
    /// Any pending search selection is dropped first; a search command
    /// may record a new one.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        self.pending_selection = None;

        match command {
            Command::NumberOfVideos => self.number_of_videos(),
            Command::ShowAllVideos => self.show_all_videos(),
            Command::Play(id) => self.play(&id),
            Command::PlayRandom => self.play_random(),
            Command::Stop => self.stop(),
            Command::Pause => self.pause(),
            Command::Continue => self.continue_video(),
            Command::ShowPlaying => self.show_playing(),
            Command::CreatePlaylist(name) => self.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => self.clear_playlist(&name),
            Command::DeletePlaylist(name) => self.delete_playlist(&name),
            Command::ShowPlaylist(name) => self.show_playlist(&name),
            Command::ShowAllPlaylists => self.show_all_playlists(),
            Command::SearchVideos(term) => self.search_videos(&term),
            Command::SearchVideosWithTag(tag) => self.search_videos_with_tag(&tag),
            Command::FlagVideo { video_id, reason } => {
                self.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo(id) => self.allow_video(&id),
            Command::Help => HELP_TEXT.iter().map(|line| line.to_string()).collect(),
            Command::Exit => Vec::new(),
        }
    }

    /// Number of videos in the catalog, flagged ones included
    pub fn number_of_videos(&self) -> Vec<String> {
        vec![format!("{} videos in the library", self.catalog.len())]
    }

    /// Every video, sorted by title then id
    pub fn show_all_videos(&self) -> Vec<String> {
        let mut lines = vec!["Here's a list of all available videos:".to_string()];
        lines.extend(self.catalog.sorted().iter().map(|video| video.describe()));
        lines
    }

    /// Load and play a video, stopping whatever was loaded before
    ///
    /// Replaying the loaded video still reports it as stopped first.
    pub fn play(&mut self, video_id: &str) -> Vec<String> {
        let Some(requested) = self.catalog.get(video_id) else {
            return vec!["Cannot play video: Video does not exist".to_string()];
        };
        if requested.is_flagged() {
            return vec![format!(
                "Cannot play video: Video is currently flagged (reason: {})",
                requested.flag_reason()
            )];
        }

        let mut lines = Vec::new();
        if self.current.is_some() {
            lines.extend(self.stop());
        }

        if let Some(video) = self.catalog.get_mut(video_id) {
            video.resume();
            lines.push(format!("Playing video: {}", video.title()));
            log::debug!("Loaded {} into the current slot", video.id());
            self.current = Some(video.id().to_string());
        }
        lines
    }

    /// Stop the loaded video and empty the current slot
    pub fn stop(&mut self) -> Vec<String> {
        let Some(id) = self.current.take() else {
            return vec!["Cannot stop video: No video is currently playing".to_string()];
        };

        match self.catalog.get_mut(&id) {
            Some(video) => {
                video.resume();
                log::debug!("Cleared current slot (was {})", id);
                vec![format!("Stopping video: {}", video.title())]
            }
            None => vec!["Cannot stop video: No video is currently playing".to_string()],
        }
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> Vec<String> {
        // Sorted so a fixed seed always picks the same video
        let candidates: Vec<String> = self
            .catalog
            .sorted()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .map(|video| video.id().to_string())
            .collect();

        if candidates.is_empty() {
            return vec!["No videos available".to_string()];
        }

        let index = self.rng.random_range(0..candidates.len());
        log::debug!("Random pick {} of {}", index + 1, candidates.len());
        self.play(&candidates[index])
    }

    /// Pause the loaded video
    pub fn pause(&mut self) -> Vec<String> {
        let Some(video) = self.current.as_deref().and_then(|id| self.catalog.get_mut(id)) else {
            return vec!["Cannot pause video: No video is currently playing".to_string()];
        };

        if video.is_paused() {
            return vec![format!("Video already paused: {}", video.title())];
        }
        video.pause();
        vec![format!("Pausing video: {}", video.title())]
    }

    /// Resume a paused video
    pub fn continue_video(&mut self) -> Vec<String> {
        let Some(video) = self.current.as_deref().and_then(|id| self.catalog.get_mut(id)) else {
            return vec!["Cannot continue video: No video is currently playing".to_string()];
        };

        if !video.is_paused() {
            return vec!["Cannot continue video: Video is not paused".to_string()];
        }
        video.resume();
        vec![format!("Continuing video: {}", video.title())]
    }

    /// Describe the loaded video
    pub fn show_playing(&self) -> Vec<String> {
        match self.current.as_deref().and_then(|id| self.catalog.get(id)) {
            Some(video) => vec![format!("Currently playing: {}", video.describe())],
            None => vec!["No video is currently playing".to_string()],
        }
    }

    /// Flag a video, stopping it first if it is loaded
    ///
    /// `None` stores the default reason.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Vec<String> {
        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);

        if self.catalog.get(video_id).is_none() {
            return vec!["Cannot flag video: Video does not exist".to_string()];
        }

        let mut lines = Vec::new();
        if self.current.as_deref() == Some(video_id) {
            lines.extend(self.stop());
        }

        if let Some(video) = self.catalog.get_mut(video_id) {
            if video.flag(reason) {
                log::debug!("Flagged {}: {}", video.id(), reason);
                lines.push(format!(
                    "Successfully flagged video: {} (reason: {})",
                    video.title(), reason
                ));
            } else {
                lines.push("Cannot flag video: Video is already flagged".to_string());
            }
        }
        lines
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str) -> Vec<String> {
        let Some(video) = self.catalog.get_mut(video_id) else {
            return vec!["Cannot remove flag from video: Video does not exist".to_string()];
        };

        if video.unflag() {
            log::debug!("Unflagged {}", video.id());
            vec![format!("Successfully removed flag from video: {}", video.title())]
        } else {
            vec!["Cannot remove flag from video: Video is not flagged".to_string()]
        }
    }
}
