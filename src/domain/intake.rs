// SPDX-License-Identifier: MPL-2.0
//! Images accepted as analysis input.

use std::fmt;
use std::path::{Path, PathBuf};

/// Image container formats the application accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
    Gif,
    Bmp,
}

impl ImageKind {
    /// All accepted kinds, in the order they are advertised to the user.
    pub const ALL: [ImageKind; 5] = [
        ImageKind::Jpeg,
        ImageKind::Png,
        ImageKind::Webp,
        ImageKind::Gif,
        ImageKind::Bmp,
    ];

    /// Short upper-case label (e.g. `JPG`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "JPG",
            ImageKind::Png => "PNG",
            ImageKind::Webp => "WebP",
            ImageKind::Gif => "GIF",
            ImageKind::Bmp => "BMP",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-chosen image file.
///
/// Only the path and a few facts about the file are kept; the bytes are
/// never read by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    path: PathBuf,
    file_name: String,
    size_bytes: u64,
    kind: ImageKind,
}

impl SelectedImage {
    /// Creates a selection. The display name falls back to the full path
    /// when the path has no UTF-8 file name.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, kind: ImageKind) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            file_name,
            size_bytes,
            kind,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name shown to the user.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn kind(&self) -> ImageKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_component() {
        let image = SelectedImage::new("/tmp/photos/a.jpg", 10, ImageKind::Jpeg);
        assert_eq!(image.file_name(), "a.jpg");
        assert_eq!(image.path(), Path::new("/tmp/photos/a.jpg"));
    }

    #[test]
    fn labels_match_advertised_formats() {
        let labels: Vec<_> = ImageKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, ["JPG", "PNG", "WebP", "GIF", "BMP"]);
    }
}
