// src/domain/video.rs
use reqwest::header::HeaderMap;

/// One playable stream for an episode.
///
/// Sources return videos in preferred order; callers treat the list index
/// as priority. No serde derive here: headers carry request state that is
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    /// Identifier of the stream within the source
    pub url: String,

    /// Quality label shown to the user ("1080p", "local", ...)
    pub quality: String,

    /// Direct playback url, once resolved
    pub video_url: Option<String>,

    /// Extra headers the player must send, if any
    pub headers: Option<HeaderMap>,
}

impl Video {
    pub fn new(
        url: impl Into<String>,
        quality: impl Into<String>,
        video_url: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            quality: quality.into(),
            video_url,
            headers: None,
        }
    }
}
