// src/sources/local/covers.rs
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::SourceResult;
use crate::util::{compare_natural, image};

/// Name given to covers we persist ourselves. Any `cover.<ext>` that holds
/// image data is accepted when reading.
pub(super) const COVER_NAME: &str = "cover.jpg";

/// A file literally named `cover.<ext>` inside `entry_dir` that holds
/// image data.
pub(super) fn find_cover(entry_dir: &Path) -> Option<PathBuf> {
    let children = fs::read_dir(entry_dir).ok()?;
    children
        .filter_map(Result::ok)
        .map(|child| child.path())
        .find(|path| {
            path.is_file()
                && path.file_stem().map_or(false, |stem| stem == "cover")
                && image::is_image(path)
        })
}

/// First file under `dir` that holds image data, in case-insensitive
/// natural order.
pub(super) fn first_image(dir: &Path) -> Option<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|child| child.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort_by(|a, b| {
        compare_natural(
            &a.file_name().unwrap_or_default().to_string_lossy(),
            &b.file_name().unwrap_or_default().to_string_lossy(),
        )
    });
    files.into_iter().find(|path| image::is_image(path))
}

/// Persist `image_data` as the cover of `entry_dir`.
///
/// Idempotent: an already-present cover wins and the stream is not
/// consumed. The entry directory is created if missing.
pub(super) fn write_cover(entry_dir: &Path, image_data: &mut dyn Read) -> SourceResult<PathBuf> {
    if let Some(existing) = find_cover(entry_dir) {
        return Ok(existing);
    }
    let destination = entry_dir.join(COVER_NAME);
    if destination.exists() {
        return Ok(destination);
    }
    fs::create_dir_all(entry_dir)?;
    let mut out = fs::File::create(&destination)?;
    io::copy(image_data, &mut out)?;
    Ok(destination)
}
