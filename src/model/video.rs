use std::cmp::Ordering;

/// Reason stored on a video flagged without an explicit one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A single video in the catalog
///
/// Title, id and tags never change after loading. Only the pause and
/// flag sub-state is mutated by player commands.
#[derive(Debug, Clone)]
pub struct Video {
    /// Video title
    title: String,

    /// Unique identifier assigned by the catalog
    id: String,

    /// Tags in catalog order (e.g. "#cat")
    tags: Vec<String>,

    paused: bool,

    flagged: bool,

    flag_reason: String,
}

impl Video {
    /// Create a new, unpaused and unflagged video
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags,
            paused: false,
            flagged: false,
            flag_reason: DEFAULT_FLAG_REASON.to_string(),
        }
    }

    /// Video title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Catalog identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tags in catalog order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Mark as paused (no-op if already paused)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Clear the paused mark (no-op if not paused)
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the video is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flag this video with a reason
    ///
    /// Returns false and leaves the stored reason untouched if the video
    /// is already flagged.
    pub fn flag(&mut self, reason: &str) -> bool {
        if self.flagged {
            return false;
        }
        self.flagged = true;
        self.flag_reason = reason.to_string();
        true
    }

    /// Remove the flag, resetting the reason
    ///
    /// Returns false if the video was not flagged.
    pub fn unflag(&mut self) -> bool {
        if !self.flagged {
            return false;
        }
        self.flagged = false;
        self.flag_reason = DEFAULT_FLAG_REASON.to_string();
        true
    }

    /// Whether the video is flagged
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Reason given when flagged, or the default
    pub fn flag_reason(&self) -> &str {
        &self.flag_reason
    }

    /// Tags rendered as `[#a #b]`
    pub fn tags_display(&self) -> String {
        format!("[{}]", self.tags.join(" "))
    }

    /// Render as `title (id) [tags]` with a FLAGGED or PAUSED suffix
    pub fn describe(&self) -> String {
        let base = format!("{} ({}) {}", self.title, self.id, self.tags_display());

        if self.flagged {
            format!("{} - FLAGGED (reason: {})", base, self.flag_reason)
        } else if self.paused {
            format!("{} - PAUSED", base)
        } else {
            base
        }
    }
}

// Equality and ordering share the (title, id) key. Ids are unique within a
// catalog, so two equal videos are the same catalog entry.
impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.id == other.id
    }
}

impl Eq for Video {}

impl PartialOrd for Video {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Video {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.id.cmp(&other.id))
    }
}
