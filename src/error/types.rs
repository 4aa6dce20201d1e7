// src/error/types.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by catalogue sources.
///
/// The display strings are user-facing: the application shows them verbatim
/// in the browse and episode screens.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The entry is licensed and episode retrieval is restricted.
    /// Must never degrade into an empty episode list.
    #[error("Licensed - No items to show")]
    Licensed,

    /// A local episode path exists but is neither a directory nor a
    /// supported video container.
    #[error("Invalid episode format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A local episode referenced by url no longer exists on disk.
    #[error("Episode not found: {}", path.display())]
    EpisodeNotFound { path: PathBuf },

    /// An entry directory could not be located in any base directory.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A persisted source id has no installed implementation behind it.
    #[error("Source not installed: {0}")]
    SourceNotInstalled(i64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
