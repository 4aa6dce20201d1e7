// src/sources/local/format.rs
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{SourceError, SourceResult};

/// Episode container formats the local source can play.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mkv"];

/// Resolved on-disk shape of a local episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Multi-file episode: a directory of parts
    Directory(PathBuf),
    /// Single file in a supported container
    Video(PathBuf),
}

impl Format {
    /// Classify an existing path. Callers check existence first.
    pub fn for_path(path: &Path) -> SourceResult<Self> {
        if path.is_dir() {
            return Ok(Format::Directory(path.to_path_buf()));
        }
        if path.extension().map_or(false, is_supported_extension) {
            return Ok(Format::Video(path.to_path_buf()));
        }
        Err(SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        match self {
            Format::Directory(path) | Format::Video(path) => path,
        }
    }
}

pub(super) fn is_supported_extension(extension: &OsStr) -> bool {
    extension.to_str().map_or(false, |ext| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(ext))
    })
}
