// SPDX-License-Identifier: MPL-2.0
//! Export of the committed buffer to disk.

use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Supported export formats for the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, keeps alpha).
    #[default]
    Png,
    /// JPEG format (lossy, flattened to RGB).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Returns the image format for the `image` crate.
    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Detects format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Detects format from a file path extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Writes `buffer` to `path`, inferring the format from the extension and
/// defaulting to PNG.
///
/// # Errors
///
/// Returns [`Error::Io`] if encoding or the file write fails.
pub fn save_buffer(buffer: &RgbaImage, path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path).unwrap_or_default();

    // JPEG has no alpha channel; flatten first
    if format == ExportFormat::Jpeg {
        let rgb = DynamicImage::ImageRgba8(buffer.clone()).to_rgb8();
        rgb.save_with_format(path, format.image_format())
            .map_err(|e| Error::Io(format!("Failed to save image: {e}")))?;
    } else {
        buffer
            .save_with_format(path, format.image_format())
            .map_err(|e| Error::Io(format!("Failed to save image: {e}")))?;
    }

    Ok(())
}

/// Generates the default filename offered by the save dialog.
///
/// Format: `{source_stem}_stamped.png`
#[must_use]
pub fn default_stamped_filename(source_path: Option<&Path>) -> String {
    let stem = source_path
        .and_then(|path| path.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    format!("{}_stamped.{}", stem, ExportFormat::default().extension())
}
