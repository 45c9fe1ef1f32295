// SPDX-License-Identifier: MPL-2.0
//! Image intake: format detection and file validation.

pub mod intake;

pub use extensions::IMAGE_EXTENSIONS;
pub use intake::{detect_kind, inspect};

/// File extensions offered by the file dialog.
pub mod extensions {
    /// Supported image file extensions (lowercase).
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];
}
