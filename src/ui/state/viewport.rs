// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the scrollable viewport state including bounds and scroll offset.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Resets the scroll offset to zero (for recentering after a new image
    /// is loaded).
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Updates the viewport state with new bounds and offset.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.offset = offset;
        self.bounds = Some(bounds);
    }

    /// Rescales the scroll offset after a zoom step so the view center
    /// tracks the zoom: `offset' = r·offset + (r − 1)·viewport/2`, clamped
    /// to the scrollable extent of the given content size.
    ///
    /// Returns the new offset so the caller can push it to the widget.
    pub fn rescale_offset(&mut self, ratio: f32, content: iced::Size) -> AbsoluteOffset {
        if let Some(bounds) = self.bounds {
            let max_x = (content.width - bounds.width).max(0.0);
            let max_y = (content.height - bounds.height).max(0.0);
            self.offset = AbsoluteOffset {
                x: (ratio * self.offset.x + (ratio - 1.0) * bounds.width / 2.0)
                    .clamp(0.0, max_x),
                y: (ratio * self.offset.y + (ratio - 1.0) * bounds.height / 2.0)
                    .clamp(0.0, max_y),
            };
        }
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset.x, 0.0);
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.bounds.is_none());
    }

    #[test]
    fn update_stores_bounds_and_offset() {
        let mut state = ViewportState::default();
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 300.0));

        state.update(bounds, AbsoluteOffset { x: 10.0, y: 5.0 });

        assert_abs_diff_eq!(state.offset.x, 10.0);
        assert_eq!(state.bounds, Some(bounds));
    }

    #[test]
    fn rescale_offset_tracks_view_center() {
        let mut state = ViewportState::default();
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 200.0));
        state.update(bounds, AbsoluteOffset { x: 100.0, y: 50.0 });

        let offset = state.rescale_offset(1.25, Size::new(1000.0, 800.0));

        // 1.25·100 + 0.25·200 = 175, 1.25·50 + 0.25·100 = 87.5
        assert_abs_diff_eq!(offset.x, 175.0);
        assert_abs_diff_eq!(offset.y, 87.5);
    }

    #[test]
    fn rescale_offset_clamps_at_origin() {
        let mut state = ViewportState::default();
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 200.0));
        state.update(bounds, AbsoluteOffset { x: 0.0, y: 0.0 });

        let offset = state.rescale_offset(0.8, Size::new(1000.0, 800.0));

        assert_abs_diff_eq!(offset.x, 0.0);
        assert_abs_diff_eq!(offset.y, 0.0);
    }

    #[test]
    fn rescale_offset_clamps_to_scrollable_extent() {
        let mut state = ViewportState::default();
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 200.0));
        state.update(bounds, AbsoluteOffset { x: 100.0, y: 50.0 });

        // Content smaller than the viewport cannot be scrolled at all
        let offset = state.rescale_offset(1.25, Size::new(300.0, 100.0));

        assert_abs_diff_eq!(offset.x, 0.0);
        assert_abs_diff_eq!(offset.y, 0.0);
    }

    #[test]
    fn rescale_without_bounds_is_a_no_op() {
        let mut state = ViewportState::default();
        state.offset = AbsoluteOffset { x: 30.0, y: 40.0 };

        let offset = state.rescale_offset(1.25, Size::new(1000.0, 800.0));

        assert_abs_diff_eq!(offset.x, 30.0);
        assert_abs_diff_eq!(offset.y, 40.0);
    }
}
