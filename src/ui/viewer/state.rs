// SPDX-License-Identifier: MPL-2.0
//! Derived viewer geometry used to keep the component lean.
//!
//! Everything here is pure arithmetic over the viewport bounds, scroll
//! offset, and zoom state; the component uses it to hit-test the cursor
//! and to map window coordinates into base-image pixel coordinates for
//! stamping.

use crate::app::config::DEFAULT_ZOOM_FACTOR;
use crate::ui::state::{ViewportState, ZoomState};
use iced::{Padding, Point, Rectangle, Size};

/// Provides higher-level geometry information for the viewer pane.
pub struct ViewerGeometry<'a> {
    canvas_size: Option<(u32, u32)>,
    viewport: &'a ViewportState,
    zoom: &'a ZoomState,
    cursor_position: Option<Point>,
}

impl<'a> ViewerGeometry<'a> {
    /// Creates a new derived geometry helper.
    #[must_use]
    pub fn new(
        canvas_size: Option<(u32, u32)>,
        viewport: &'a ViewportState,
        zoom: &'a ZoomState,
        cursor_position: Option<Point>,
    ) -> Self {
        Self {
            canvas_size,
            viewport,
            zoom,
            cursor_position,
        }
    }

    /// Computes the zoom factor required to fit the image inside the
    /// viewport.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_fit_factor(&self) -> Option<f32> {
        let (width, height) = self.canvas_size?;
        let viewport = self.viewport.bounds?;

        if width == 0 || height == 0 {
            return Some(DEFAULT_ZOOM_FACTOR);
        }

        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }

        let scale_x = viewport.width / width as f32;
        let scale_y = viewport.height / height as f32;
        let scale = scale_x.min(scale_y);

        if !scale.is_finite() || scale <= 0.0 {
            return Some(DEFAULT_ZOOM_FACTOR);
        }

        Some(scale)
    }

    /// The factor actually applied on screen: the fit factor while
    /// fit-to-window is on, the manual factor otherwise.
    #[must_use]
    pub fn effective_factor(&self) -> f32 {
        if self.zoom.fit_to_window {
            self.compute_fit_factor().unwrap_or(DEFAULT_ZOOM_FACTOR)
        } else {
            self.zoom.factor.value()
        }
    }

    /// Returns the scaled image dimensions for the effective zoom factor.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scaled_size(&self) -> Option<Size> {
        let (width, height) = self.canvas_size?;
        let factor = self.effective_factor().max(0.01);
        Some(Size::new(
            (width as f32 * factor).max(1.0),
            (height as f32 * factor).max(1.0),
        ))
    }

    fn compute_padding(viewport: Rectangle, size: Size) -> Padding {
        let horizontal = ((viewport.width - size.width) / 2.0).max(0.0);
        let vertical = ((viewport.height - size.height) / 2.0).max(0.0);

        Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the image bounds relative to the window, factoring in
    /// scroll and centering padding.
    #[must_use]
    pub fn image_bounds_in_window(&self) -> Option<Rectangle> {
        let viewport = self.viewport.bounds?;
        let size = self.scaled_size()?;
        let padding = Self::compute_padding(viewport, size);

        let left = viewport.x - self.viewport.offset.x + padding.left;
        let top = viewport.y - self.viewport.offset.y + padding.top;

        Some(Rectangle::new(Point::new(left, top), size))
    }

    /// Maps a window-space cursor position into base-image pixel
    /// coordinates, or `None` when the cursor is outside the image.
    #[must_use]
    pub fn cursor_to_image(&self, cursor: Point) -> Option<(f32, f32)> {
        let bounds = self.image_bounds_in_window()?;
        let viewport = self.viewport.bounds?;

        if !viewport.contains(cursor) || !bounds.contains(cursor) {
            return None;
        }

        let factor = self.effective_factor().max(0.01);
        Some(((cursor.x - bounds.x) / factor, (cursor.y - bounds.y) / factor))
    }

    /// Indicates whether the cursor is currently positioned over the image.
    #[must_use]
    pub fn is_cursor_over_image(&self) -> bool {
        self.cursor_position
            .is_some_and(|cursor| self.cursor_to_image(cursor).is_some())
    }
}
