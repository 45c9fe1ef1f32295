// SPDX-License-Identifier: MPL-2.0
//! Checks applied to picked or dropped files before they reach the session.
//!
//! Only file system metadata is consulted. The image bytes are never read
//! here; format detection goes by extension.

use crate::domain::intake::{ImageKind, SelectedImage};
use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::fs;
use std::path::Path;

/// Bytes per megabyte, as used for the configured size limit.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Detects the image kind of `path` from its extension.
///
/// Returns `None` for extensions outside [`ImageKind::ALL`].
#[must_use]
pub fn detect_kind(path: &Path) -> Option<ImageKind> {
    match ImageFormat::from_path(path).ok()? {
        ImageFormat::Jpeg => Some(ImageKind::Jpeg),
        ImageFormat::Png => Some(ImageKind::Png),
        ImageFormat::WebP => Some(ImageKind::Webp),
        ImageFormat::Gif => Some(ImageKind::Gif),
        ImageFormat::Bmp => Some(ImageKind::Bmp),
        _ => None,
    }
}

/// Validates `path` as analysis input.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] if the extension is not an accepted image format
/// - [`Error::Io`] if the file cannot be inspected or is not a regular file
/// - [`Error::FileTooLarge`] if the file exceeds `max_bytes`
pub fn inspect(path: &Path, max_bytes: u64) -> Result<SelectedImage> {
    let Some(kind) = detect_kind(path) else {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(Error::UnsupportedFormat(extension));
    };

    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(Error::Io(format!("{} is not a file", path.display())));
    }

    let size_bytes = metadata.len();
    if size_bytes > max_bytes {
        return Err(Error::FileTooLarge {
            size_bytes,
            limit_bytes: max_bytes,
        });
    }

    Ok(SelectedImage::new(path, size_bytes, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::extensions::IMAGE_EXTENSIONS;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![0_u8; len]).expect("failed to write test file");
        path
    }

    #[test]
    fn detects_kinds_case_insensitively() {
        assert_eq!(detect_kind(Path::new("a.JPG")), Some(ImageKind::Jpeg));
        assert_eq!(detect_kind(Path::new("a.jpeg")), Some(ImageKind::Jpeg));
        assert_eq!(detect_kind(Path::new("a.png")), Some(ImageKind::Png));
        assert_eq!(detect_kind(Path::new("a.webp")), Some(ImageKind::Webp));
        assert_eq!(detect_kind(Path::new("a.tiff")), None);
        assert_eq!(detect_kind(Path::new("notes.txt")), None);
        assert_eq!(detect_kind(Path::new("no_extension")), None);
    }

    #[test]
    fn every_dialog_extension_is_detected() {
        for ext in IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("photo.{ext}"));
            assert!(detect_kind(&path).is_some(), "{ext} should be accepted");
        }
    }

    #[test]
    fn inspect_accepts_small_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_file(dir.path(), "dinner.png", 128);

        let image = inspect(&path, BYTES_PER_MB).expect("image should be accepted");
        assert_eq!(image.file_name(), "dinner.png");
        assert_eq!(image.size_bytes(), 128);
        assert_eq!(image.kind(), ImageKind::Png);
    }

    #[test]
    fn inspect_rejects_unsupported_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_file(dir.path(), "dinner.tiff", 16);

        let err = inspect(&path, BYTES_PER_MB).unwrap_err();
        assert_eq!(err, Error::UnsupportedFormat("tiff".into()));
    }

    #[test]
    fn inspect_rejects_oversized_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_file(dir.path(), "big.jpg", 2048);

        let err = inspect(&path, 1024).unwrap_err();
        assert_eq!(
            err,
            Error::FileTooLarge {
                size_bytes: 2048,
                limit_bytes: 1024
            }
        );
    }

    #[test]
    fn inspect_accepts_file_at_limit() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_file(dir.path(), "exact.jpg", 1024);
        assert!(inspect(&path, 1024).is_ok());
    }

    #[test]
    fn inspect_rejects_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = inspect(&dir.path().join("ghost.jpg"), BYTES_PER_MB).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn inspect_rejects_directory_named_like_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let fake = dir.path().join("album.jpg");
        fs::create_dir(&fake).expect("failed to create dir");

        let err = inspect(&fake, BYTES_PER_MB).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
