use serde::{Deserialize, Serialize};

/// A catalogue entry: one anime title as presented by a source.
///
/// Entries are ephemeral per fetch; persisted copies live in the library
/// layer, keyed by `(source_id, url)`. `url` is an opaque per-source
/// identifier — a site-relative path for HTTP sources, a directory name for
/// the local source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque per-source identifier (REQUIRED)
    pub url: String,

    /// Display title (REQUIRED)
    pub title: String,

    pub author: Option<String>,

    pub artist: Option<String>,

    pub description: Option<String>,

    /// Comma-joined genre list, matching the persisted representation
    pub genre: Option<String>,

    pub status: EntryStatus,

    /// Cover location: an absolute file path for the local source,
    /// an image url for HTTP sources
    pub thumbnail_url: Option<String>,

    /// Whether details have been fetched at least once
    pub initialized: bool,
}

/// Publication status of an entry.
///
/// The integer codes are the wire/sidecar encoding and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Unknown,
    Ongoing,
    Completed,
    Licensed,
}

impl Entry {
    /// Create a minimal, uninitialized entry
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            author: None,
            artist: None,
            description: None,
            genre: None,
            status: EntryStatus::Unknown,
            thumbnail_url: None,
            initialized: false,
        }
    }
}

impl EntryStatus {
    /// Decode the sidecar/wire integer. Unrecognized codes map to Unknown.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => EntryStatus::Ongoing,
            2 => EntryStatus::Completed,
            3 => EntryStatus::Licensed,
            _ => EntryStatus::Unknown,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EntryStatus::Unknown => 0,
            EntryStatus::Ongoing => 1,
            EntryStatus::Completed => 2,
            EntryStatus::Licensed => 3,
        }
    }
}

impl Default for EntryStatus {
    fn default() -> Self {
        EntryStatus::Unknown
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Unknown => write!(f, "unknown"),
            EntryStatus::Ongoing => write!(f, "ongoing"),
            EntryStatus::Completed => write!(f, "completed"),
            EntryStatus::Licensed => write!(f, "licensed"),
        }
    }
}
