// SPDX-License-Identifier: MPL-2.0
//! Media handling: image decoding, watermark assets, stamp compositing,
//! export, and print-page composition.

pub mod canvas;
pub mod export;
pub mod image;
pub mod print;
pub mod watermark;

pub use canvas::StampCanvas;
pub use image::{load_image, ImageData};

/// File extension groups used by dialogs and drop handling.
pub mod extensions {
    use std::path::Path;

    /// Raster formats accepted by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "bmp", "gif"];

    /// Formats accepted for user-supplied watermark assets.
    pub const WATERMARK_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "bmp", "gif", "svg"];

    /// Save dialog filters, grouped by format name.
    pub const IMAGE_SAVE_FILTERS: &[(&str, &[&str])] =
        &[("PNG Image", &["png"]), ("JPEG Image", &["jpg", "jpeg"])];

    /// Returns whether `path` has a supported raster image extension.
    #[must_use]
    pub fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::extensions::*;
    use std::path::Path;

    #[test]
    fn supported_image_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
