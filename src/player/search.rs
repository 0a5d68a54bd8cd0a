//! Title and tag search with a follow-up numeric selection
//!
//! A search with results records the listed ids. The caller then reads
//! one token from the user and passes it to `resolve_selection`.

use super::VideoPlayer;
use crate::model::Video;

const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

impl VideoPlayer {
    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos(&mut self, term: &str) -> Vec<String> {
        let needle = term.to_lowercase();
        self.list_matches(term, |video| video.title().to_lowercase().contains(&needle))
    }

    /// Unflagged videos whose tags contain `tag`, ignoring case
    ///
    /// The query must contain a `#`; without one nothing matches.
    pub fn search_videos_with_tag(&mut self, tag: &str) -> Vec<String> {
        if !tag.contains('#') {
            self.pending_selection = None;
            return vec![format!("No search results for {}", tag)];
        }

        let needle = tag.to_lowercase();
        self.list_matches(tag, |video| {
            video.tags_display().to_lowercase().contains(&needle)
        })
    }

    /// Whether a search is waiting for the user's choice
    pub fn has_pending_selection(&self) -> bool {
        self.pending_selection.is_some()
    }

    /// Play the video at a 1-based position in the last search listing
    ///
    /// Only the first whitespace-separated token of `input` is read.
    /// Non-numeric tokens, 0, out-of-range numbers and a missing listing
    /// all mean "play nothing". The pending listing is consumed either way.
    pub fn resolve_selection(&mut self, input: &str) -> Vec<String> {
        let Some(ids) = self.pending_selection.take() else {
            return Vec::new();
        };

        let token = input.split_whitespace().next().unwrap_or_default();
        match token.parse::<usize>() {
            Ok(position) if (1..=ids.len()).contains(&position) => {
                self.play(&ids[position - 1])
            }
            _ => {
                log::debug!("Selection {:?} declined", token);
                Vec::new()
            }
        }
    }

    fn list_matches<F>(&mut self, term: &str, matches: F) -> Vec<String>
    where
        F: Fn(&Video) -> bool,
    {
        let results: Vec<&Video> = self
            .catalog
            .sorted()
            .into_iter()
            .filter(|video| !video.is_flagged() && matches(*video))
            .collect();

        if results.is_empty() {
            self.pending_selection = None;
            return vec![format!("No search results for {}", term)];
        }

        let mut lines = vec![format!("Here are the results for {}:", term)];
        lines.extend(
            results
                .iter()
                .enumerate()
                .map(|(index, video)| format!("{}) {}", index + 1, video.describe())),
        );
        lines.extend(SELECTION_PROMPT.iter().map(|line| line.to_string()));

        let ids = results.iter().map(|video| video.id().to_string()).collect();
        self.pending_selection = Some(ids);
        lines
    }
}
