// src/util/image.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Whether the file at `path` is an image, decided by content.
///
/// Only the leading bytes are read; extension is deliberately ignored so a
/// mislabeled `cover.png` that is really a JPEG still works.
pub fn is_image(path: &Path) -> bool {
    let mut header = [0u8; 64];
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let Ok(read) = file.read(&mut header) else {
        return false;
    };
    image::guess_format(&header[..read]).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_recognizes_magic_bytes() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_image(&write_file(dir.path(), "cover.png", PNG_HEADER)));
        assert!(is_image(&write_file(dir.path(), "cover.jpg", JPEG_HEADER)));
    }

    #[test]
    fn test_extension_does_not_matter() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_image(&write_file(dir.path(), "cover.dat", PNG_HEADER)));
    }

    #[test]
    fn test_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_image(&write_file(dir.path(), "cover.jpg", b"not an image")));
        assert!(!is_image(&write_file(dir.path(), "empty.png", b"")));
        assert!(!is_image(&dir.path().join("missing.png")));
    }
}
