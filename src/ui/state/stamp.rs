// SPDX-License-Identifier: MPL-2.0
//! Stamp gesture state.
//!
//! Tracks the Ctrl modifier and the position of the live watermark
//! preview. The preview position is kept in base-image pixel coordinates
//! so it stays anchored when the watermark is rescaled under the cursor.

/// Interaction state for the watermark gestures.
#[derive(Debug, Clone, Default)]
pub struct StampState {
    /// Whether the Ctrl modifier is currently held.
    pub modifier_held: bool,

    /// Center of the live preview in base-image pixel coordinates, if a
    /// preview is showing.
    pub preview_center: Option<(f32, f32)>,
}

impl StampState {
    /// Updates the modifier flag. Returns `true` when the modifier was
    /// released and an active preview must be cleared.
    pub fn set_modifier(&mut self, held: bool) -> bool {
        let released = self.modifier_held && !held;
        self.modifier_held = held;
        if released {
            self.preview_center = None;
        }
        released
    }

    /// Records a preview at `center`.
    pub fn show_preview(&mut self, center: (f32, f32)) {
        self.preview_center = Some(center);
    }

    /// Drops the preview position (e.g. cursor left the image).
    pub fn clear_preview(&mut self) {
        self.preview_center = None;
    }

    /// Resets all gesture state (e.g. when a new image is loaded).
    pub fn reset(&mut self) {
        self.modifier_held = false;
        self.preview_center = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releasing_modifier_clears_preview() {
        let mut state = StampState::default();
        state.set_modifier(true);
        state.show_preview((10.0, 20.0));

        let released = state.set_modifier(false);

        assert!(released);
        assert!(state.preview_center.is_none());
    }

    #[test]
    fn holding_modifier_keeps_preview() {
        let mut state = StampState::default();
        state.set_modifier(true);
        state.show_preview((10.0, 20.0));

        let released = state.set_modifier(true);

        assert!(!released);
        assert_eq!(state.preview_center, Some((10.0, 20.0)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = StampState::default();
        state.set_modifier(true);
        state.show_preview((1.0, 2.0));

        state.reset();

        assert!(!state.modifier_held);
        assert!(state.preview_center.is_none());
    }
}
