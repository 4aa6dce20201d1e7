// src/sources/stub.rs
use async_trait::async_trait;

use crate::domain::{Entry, Episode, Video};
use crate::error::{SourceError, SourceResult};

use super::Source;

/// Placeholder for a persisted source id whose implementation is not
/// installed.
///
/// Keeps library rows addressable (the id and a displayable name survive)
/// while every operation fails with [`SourceError::SourceNotInstalled`].
#[derive(Debug, Clone)]
pub struct StubSource {
    id: i64,
    name: String,
}

impl StubSource {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: id.to_string(),
        }
    }

    /// A stub that still remembers the uninstalled source's name.
    pub fn with_name(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[async_trait]
impl Source for StubSource {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn lang(&self) -> &str {
        ""
    }

    async fn get_details(&self, _entry: &Entry) -> SourceResult<Entry> {
        Err(SourceError::SourceNotInstalled(self.id))
    }

    async fn get_episode_list(&self, _entry: &Entry) -> SourceResult<Vec<Episode>> {
        Err(SourceError::SourceNotInstalled(self.id))
    }

    async fn get_video_list(&self, _episode: &Episode) -> SourceResult<Vec<Video>> {
        Err(SourceError::SourceNotInstalled(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_fails_as_not_installed() {
        let stub = StubSource::new(42);
        let entry = Entry::new("x", "x");
        let episode = Episode::new("x", "x");

        assert!(matches!(
            stub.get_details(&entry).await,
            Err(SourceError::SourceNotInstalled(42))
        ));
        assert!(matches!(
            stub.get_episode_list(&entry).await,
            Err(SourceError::SourceNotInstalled(42))
        ));
        assert!(matches!(
            stub.get_video_list(&episode).await,
            Err(SourceError::SourceNotInstalled(42))
        ));
    }

    #[test]
    fn test_display_name_defaults_to_id() {
        assert_eq!(StubSource::new(7).name(), "7");
        assert_eq!(StubSource::with_name(7, "Old Source").name(), "Old Source");
    }
}
