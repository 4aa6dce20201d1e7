use serde::Deserialize;

use super::entity::{Entry, EntryStatus};

/// Sidecar metadata placed next to a local entry's episodes, as a `.json`
/// file inside the entry directory.
///
/// Every key is optional; applying the metadata only overwrites entry
/// fields that are present in the file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub genre: Option<Vec<String>>,
    pub status: Option<i32>,
}

impl EntryMetadata {
    /// Overlay present fields onto `entry` and mark it initialized.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(author) = &self.author {
            entry.author = Some(author.clone());
        }
        if let Some(artist) = &self.artist {
            entry.artist = Some(artist.clone());
        }
        if let Some(description) = &self.description {
            entry.description = Some(description.clone());
        }
        if let Some(genre) = &self.genre {
            entry.genre = Some(genre.join(", "));
        }
        if let Some(status) = self.status {
            entry.status = EntryStatus::from_code(status);
        }
        entry.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut entry = Entry::new("My Show", "My Show");
        entry.author = Some("someone".to_string());

        let metadata: EntryMetadata = serde_json::from_str(
            r#"{"title": "My Show (2024)", "genre": ["Action", "Drama"], "status": 2}"#,
        )
        .unwrap();
        metadata.apply_to(&mut entry);

        assert_eq!(entry.title, "My Show (2024)");
        assert_eq!(entry.genre.as_deref(), Some("Action, Drama"));
        assert_eq!(entry.status, EntryStatus::Completed);
        // absent keys leave existing values alone
        assert_eq!(entry.author.as_deref(), Some("someone"));
        assert!(entry.initialized);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let metadata: Result<EntryMetadata, _> =
            serde_json::from_str(r#"{"title": "x", "rating": 9.5}"#);
        assert!(metadata.is_ok());
    }

    #[test]
    fn test_empty_object_parses() {
        let metadata: EntryMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.title.is_none());
        assert!(metadata.status.is_none());
    }
}
