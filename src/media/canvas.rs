// SPDX-License-Identifier: MPL-2.0
//! The stamping canvas: base image, committed buffer, and display handle.
//!
//! The base pixels are immutable after load. Stamps are composited into
//! the committed buffer at base resolution, so zooming the view never
//! degrades them. The display handle mirrors the committed buffer, plus a
//! transient half-opacity preview while the modifier gesture is active.

use crate::app::config::PREVIEW_OPACITY;
use crate::error::Result;
use crate::media::watermark::Watermark;
use crate::media::ImageData;
use image_rs::RgbaImage;

/// Mutable pixel state behind the viewer.
#[derive(Debug, Clone)]
pub struct StampCanvas {
    base: RgbaImage,
    committed: RgbaImage,
    display: ImageData,
    preview_active: bool,
}

impl StampCanvas {
    /// Creates a canvas from freshly decoded image data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the pixel buffer does not
    /// match its recorded dimensions.
    pub fn new(data: ImageData) -> Result<Self> {
        let base = data.to_rgba_image()?;
        let committed = base.clone();
        Ok(Self {
            base,
            committed,
            display: data,
            preview_active: false,
        })
    }

    /// Creates a canvas directly from a pixel buffer (used by tests and
    /// benches).
    #[must_use]
    pub fn from_rgba(base: RgbaImage) -> Self {
        let committed = base.clone();
        let display = image_data_from(&committed);
        Self {
            base,
            committed,
            display,
            preview_active: false,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.base.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.base.height()
    }

    /// The image data currently shown by the widget.
    #[must_use]
    pub fn display(&self) -> &ImageData {
        &self.display
    }

    /// The permanent buffer that export and print operate on.
    #[must_use]
    pub fn committed(&self) -> &RgbaImage {
        &self.committed
    }

    /// Whether a transient preview is currently shown.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview_active
    }

    /// Shows a half-opacity preview of `mark` centered on `center`
    /// (base-image pixel coordinates). The committed buffer is untouched.
    pub fn preview(&mut self, mark: &Watermark, center: (f32, f32)) {
        let mut frame = self.committed.clone();
        let (left, top) = stamp_origin(center, mark.scaled());
        blend_over(&mut frame, mark.scaled(), left, top, PREVIEW_OPACITY);
        self.display = image_data_from(&frame);
        self.preview_active = true;
    }

    /// Drops the preview and shows the committed buffer again.
    pub fn clear_preview(&mut self) {
        if self.preview_active {
            self.display = image_data_from(&self.committed);
            self.preview_active = false;
        }
    }

    /// Stamps `mark` permanently into the committed buffer, centered on
    /// `center` (base-image pixel coordinates).
    pub fn commit(&mut self, mark: &Watermark, center: (f32, f32)) {
        let (left, top) = stamp_origin(center, mark.scaled());
        blend_over(&mut self.committed, mark.scaled(), left, top, 1.0);
        self.display = image_data_from(&self.committed);
        self.preview_active = false;
    }
}

fn image_data_from(buffer: &RgbaImage) -> ImageData {
    ImageData::from_rgba(buffer.width(), buffer.height(), buffer.as_raw().clone())
}

/// Top-left origin that centers `stamp` on `center`.
#[allow(clippy::cast_possible_truncation)]
fn stamp_origin(center: (f32, f32), stamp: &RgbaImage) -> (i64, i64) {
    let left = (center.0 - stamp.width() as f32 / 2.0).round() as i64;
    let top = (center.1 - stamp.height() as f32 / 2.0).round() as i64;
    (left, top)
}

/// Source-over blend of `stamp` onto `canvas` at (`left`, `top`), with the
/// stamp's alpha additionally scaled by `opacity`. Pixels falling outside
/// the canvas are clipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn blend_over(canvas: &mut RgbaImage, stamp: &RgbaImage, left: i64, top: i64, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    let canvas_width = i64::from(canvas.width());
    let canvas_height = i64::from(canvas.height());

    for (sx, sy, src) in stamp.enumerate_pixels() {
        let dx = left + i64::from(sx);
        let dy = top + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= canvas_width || dy >= canvas_height {
            continue;
        }

        let src_alpha = f32::from(src[3]) / 255.0 * opacity;
        if src_alpha <= 0.0 {
            continue;
        }

        let dst = canvas.get_pixel_mut(dx as u32, dy as u32);
        let dst_alpha = f32::from(dst[3]) / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

        for channel in 0..3 {
            let blended = f32::from(src[channel]) * src_alpha
                + f32::from(dst[channel]) * dst_alpha * (1.0 - src_alpha);
            // Un-premultiply so the channel stays meaningful for a
            // non-opaque destination.
            let value = if out_alpha > 0.0 {
                blended / out_alpha
            } else {
                0.0
            };
            dst[channel] = value.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::watermark::{MarkFactor, Watermark};
    use image_rs::{Rgba, RgbaImage};

    fn black_canvas(width: u32, height: u32) -> StampCanvas {
        StampCanvas::from_rgba(RgbaImage::from_pixel(
            width,
            height,
            Rgba([0, 0, 0, 255]),
        ))
    }

    fn white_mark(width: u32, height: u32) -> Watermark {
        Watermark::new(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 255, 255, 255]),
        ))
        .expect("valid watermark")
    }

    #[test]
    fn commit_writes_opaque_stamp_into_committed_buffer() {
        let mut canvas = black_canvas(8, 8);
        let mark = white_mark(2, 2);

        canvas.commit(&mark, (4.0, 4.0));

        assert_eq!(*canvas.committed().get_pixel(4, 4), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.committed().get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn preview_leaves_committed_buffer_untouched() {
        let mut canvas = black_canvas(8, 8);
        let mark = white_mark(2, 2);

        canvas.preview(&mark, (4.0, 4.0));

        assert!(canvas.has_preview());
        assert_eq!(*canvas.committed().get_pixel(4, 4), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn preview_blends_at_half_opacity() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let stamp = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));

        blend_over(&mut canvas, &stamp, 1, 1, 0.5);

        let blended = canvas.get_pixel(1, 1);
        // 50% white over opaque black
        assert_eq!(blended[0], 128);
        assert_eq!(blended[3], 255);
    }

    #[test]
    fn commit_survives_preview_and_clear() {
        let mut canvas = black_canvas(8, 8);
        let mark = white_mark(2, 2);

        canvas.commit(&mark, (2.0, 2.0));
        canvas.preview(&mark, (6.0, 6.0));
        canvas.clear_preview();

        // Committed stamp still present, previewed one gone
        assert_eq!(*canvas.committed().get_pixel(2, 2), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.committed().get_pixel(6, 6), Rgba([0, 0, 0, 255]));
        assert!(!canvas.has_preview());
    }

    #[test]
    fn clear_preview_restores_display_to_committed() {
        let mut canvas = black_canvas(4, 4);
        let mark = white_mark(2, 2);

        canvas.preview(&mark, (2.0, 2.0));
        canvas.clear_preview();

        assert_eq!(canvas.display().rgba_bytes(), canvas.committed().as_raw().as_slice());
    }

    #[test]
    fn blend_clips_at_canvas_edges() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let stamp = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));

        // Stamp centered on the top-left corner: three quarters fall outside
        blend_over(&mut canvas, &stamp, -2, -2, 1.0);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn transparent_stamp_pixels_leave_canvas_unchanged() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let stamp = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));

        blend_over(&mut canvas, &stamp, 0, 0, 1.0);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn stamp_origin_centers_the_stamp() {
        let stamp = RgbaImage::new(4, 2);
        assert_eq!(stamp_origin((10.0, 10.0), &stamp), (8, 9));
    }

    #[test]
    fn scaled_mark_commits_at_scaled_size() {
        let mut canvas = black_canvas(32, 32);
        let mut mark = white_mark(4, 4);
        mark.set_factor(MarkFactor::new(2.0));

        canvas.commit(&mark, (16.0, 16.0));

        // An 8x8 stamp centered at (16, 16) covers [12, 20)
        assert_eq!(*canvas.committed().get_pixel(12, 12), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.committed().get_pixel(19, 19), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.committed().get_pixel(11, 11), Rgba([0, 0, 0, 255]));
    }
}
