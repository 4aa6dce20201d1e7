use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single watchable unit of an entry.
///
/// Like entries, episodes are ephemeral per fetch. `url` points at the
/// playable resource: a site-relative path for HTTP sources, an absolute
/// file or directory path for the local source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub url: String,

    /// Cleaned display name (entry title stripped, delimiters trimmed)
    pub name: String,

    /// Upload/modification timestamp, when the source knows one
    pub date_upload: Option<DateTime<Utc>>,

    /// Best-effort parsed number. [`Episode::UNKNOWN_NUMBER`] when the
    /// recognizer could not find one; unrecognized episodes still list and
    /// participate in sorting.
    pub episode_number: f32,

    pub seen: bool,

    pub bookmark: bool,
}

impl Episode {
    /// Sentinel for an unrecognized episode number. Kept as a negative
    /// float (not an Option) so descending sorts are compatible with
    /// persisted episode rows.
    pub const UNKNOWN_NUMBER: f32 = -1.0;

    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            date_upload: None,
            episode_number: Self::UNKNOWN_NUMBER,
            seen: false,
            bookmark: false,
        }
    }

    pub fn has_recognized_number(&self) -> bool {
        self.episode_number >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_episode_has_no_number() {
        let episode = Episode::new("/library/My Show/01.mp4", "01");
        assert!(!episode.has_recognized_number());
        assert_eq!(episode.episode_number, Episode::UNKNOWN_NUMBER);
        assert!(!episode.seen);
        assert!(!episode.bookmark);
    }
}
