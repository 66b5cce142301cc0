// SPDX-License-Identifier: MPL-2.0
//! Print support: page composition and handoff to the system spooler.
//!
//! The committed buffer is composed onto a white page raster at 300 DPI,
//! scaled to fit the printable area (page minus margins) while preserving
//! aspect ratio, then spooled through `lp`, falling back to `lpr`.

use crate::app::config::PRINT_DPI;
use crate::error::{PrintError, Result};
use image_rs::imageops::FilterType;
use image_rs::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Paper sizes offered for printing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    /// Physical size in millimeters (width, height), portrait.
    #[must_use]
    fn size_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }
}

/// Pixel geometry of the page raster being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u32,
    pub height: u32,
    /// Uniform margin excluded from the printable area.
    pub margin: u32,
}

const MARGIN_MM: f32 = 10.0;

impl PageLayout {
    /// Builds the pixel layout for `paper` at the configured print DPI.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_paper(paper: PaperSize) -> Self {
        let (width_mm, height_mm) = paper.size_mm();
        let px_per_mm = PRINT_DPI as f32 / 25.4;
        Self {
            width: (width_mm * px_per_mm).round() as u32,
            height: (height_mm * px_per_mm).round() as u32,
            margin: (MARGIN_MM * px_per_mm).round() as u32,
        }
    }

    #[must_use]
    pub fn printable_width(&self) -> u32 {
        self.width.saturating_sub(self.margin * 2).max(1)
    }

    #[must_use]
    pub fn printable_height(&self) -> u32 {
        self.height.saturating_sub(self.margin * 2).max(1)
    }
}

/// Scales (`src_width`, `src_height`) to fit within (`max_width`,
/// `max_height`) preserving aspect ratio. Never returns a zero dimension.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_dimensions(
    src_width: u32,
    src_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (1, 1);
    }

    let scale_x = max_width as f32 / src_width as f32;
    let scale_y = max_height as f32 / src_height as f32;
    let scale = scale_x.min(scale_y);

    let width = ((src_width as f32 * scale).round() as u32).max(1);
    let height = ((src_height as f32 * scale).round() as u32).max(1);
    (width, height)
}

/// Composes `image` onto a white page, fit to the printable area and
/// centered.
#[must_use]
pub fn compose_page(image: &RgbaImage, layout: &PageLayout) -> RgbaImage {
    let mut page = RgbaImage::from_pixel(layout.width, layout.height, Rgba([255, 255, 255, 255]));

    let (fit_width, fit_height) = fit_dimensions(
        image.width(),
        image.height(),
        layout.printable_width(),
        layout.printable_height(),
    );

    let scaled = if (fit_width, fit_height) == image.dimensions() {
        image.clone()
    } else {
        image_rs::imageops::resize(image, fit_width, fit_height, FilterType::Triangle)
    };

    let left = i64::from((layout.width - fit_width.min(layout.width)) / 2);
    let top = i64::from((layout.height - fit_height.min(layout.height)) / 2);
    image_rs::imageops::overlay(&mut page, &scaled, left, top);

    page
}

/// Composes the page for `image` and hands it to the system print spooler.
///
/// # Errors
///
/// Returns [`crate::error::Error::Print`] if the spool file cannot be
/// written, no spooler binary is available, or the spooler exits non-zero.
pub fn print_image(image: &RgbaImage, paper: PaperSize) -> Result<()> {
    let layout = PageLayout::for_paper(paper);
    let page = compose_page(image, &layout);

    let spool_path = spool_file_path();
    page.save(&spool_path)
        .map_err(|e| PrintError::SpoolWrite(e.to_string()))?;

    let result = spool(&spool_path);

    // The spooler has its own copy once it accepts the job; the temp file
    // is best-effort cleanup either way.
    let _ = std::fs::remove_file(&spool_path);

    result
}

fn spool_file_path() -> PathBuf {
    std::env::temp_dir().join(format!("iced_mark_print_{}.png", std::process::id()))
}

/// Submits `path` to `lp`, falling back to `lpr` when `lp` is absent.
fn spool(path: &Path) -> Result<()> {
    for spooler in ["lp", "lpr"] {
        match Command::new(spooler).arg(path).output() {
            Ok(output) if output.status.success() => {
                log::info!("spooled print job via {}", spooler);
                return Ok(());
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(PrintError::SpoolerFailed(stderr).into());
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} not found, trying next spooler", spooler);
            }
            Err(err) => {
                return Err(PrintError::SpoolerFailed(err.to_string()).into());
            }
        }
    }

    Err(PrintError::SpoolerUnavailable.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_layout() -> PageLayout {
        PageLayout {
            width: 200,
            height: 300,
            margin: 10,
        }
    }

    #[test]
    fn a4_layout_matches_300_dpi() {
        let layout = PageLayout::for_paper(PaperSize::A4);
        assert_eq!(layout.width, 2480);
        assert_eq!(layout.height, 3508);
    }

    #[test]
    fn fit_dimensions_preserves_aspect_ratio() {
        // 2:1 landscape into a 100x100 box
        assert_eq!(fit_dimensions(200, 100, 100, 100), (100, 50));
        // 1:2 portrait into a 100x100 box
        assert_eq!(fit_dimensions(100, 200, 100, 100), (50, 100));
    }

    #[test]
    fn fit_dimensions_upscales_small_sources() {
        assert_eq!(fit_dimensions(10, 10, 100, 80), (80, 80));
    }

    #[test]
    fn fit_dimensions_handles_empty_source() {
        assert_eq!(fit_dimensions(0, 10, 100, 100), (1, 1));
    }

    #[test]
    fn composed_page_has_layout_dimensions_and_white_margins() {
        let image = RgbaImage::from_pixel(500, 500, Rgba([0, 0, 0, 255]));
        let layout = test_layout();

        let page = compose_page(&image, &layout);

        assert_eq!(page.dimensions(), (layout.width, layout.height));
        // Corners stay white: the image is fit inside the margins
        assert_eq!(*page.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(
            *page.get_pixel(layout.width - 1, layout.height - 1),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn composed_page_centers_the_image() {
        let image = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let layout = test_layout();

        let page = compose_page(&image, &layout);

        // Square source in a 180x280 printable area fits to 180x180,
        // centered at (10, 60)
        assert_eq!(*page.get_pixel(100, 150), Rgba([0, 0, 0, 255]));
        assert_eq!(*page.get_pixel(100, 30), Rgba([255, 255, 255, 255]));
        assert_eq!(*page.get_pixel(100, 270), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn image_never_bleeds_into_margins() {
        let image = RgbaImage::from_pixel(5000, 50, Rgba([0, 0, 0, 255]));
        let layout = test_layout();

        let page = compose_page(&image, &layout);

        for x in 0..layout.width {
            for y in 0..layout.margin {
                assert_eq!(*page.get_pixel(x, y), Rgba([255, 255, 255, 255]));
            }
        }
    }
}
