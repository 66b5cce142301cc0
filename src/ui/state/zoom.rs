// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - The manual zoom factor and its multiplicative stepping
//! - Fit-to-window mode

// Re-export zoom constants from centralized config
pub use crate::app::config::{
    DEFAULT_FIT_TO_WINDOW, DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_IN_RATIO,
    ZOOM_OUT_RATIO,
};

/// Zoom factor, guaranteed to be within the valid range.
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    /// Returns the raw factor value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    /// Returns whether the factor is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// One multiplicative step in.
    #[must_use]
    pub fn zoomed_in(self) -> Self {
        Self::new(self.0 * ZOOM_IN_RATIO)
    }

    /// One multiplicative step out.
    #[must_use]
    pub fn zoomed_out(self) -> Self {
        Self::new(self.0 * ZOOM_OUT_RATIO)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Manages all zoom-related state for the image viewer
#[derive(Debug, Clone)]
pub struct ZoomState {
    /// Current manual zoom factor (ignored while `fit_to_window` is on).
    pub factor: ZoomFactor,

    /// Whether fit-to-window mode is enabled
    pub fit_to_window: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: ZoomFactor::default(),
            fit_to_window: DEFAULT_FIT_TO_WINDOW,
        }
    }
}

impl ZoomState {
    /// Applies one zoom-in step. Returns the ratio actually applied.
    pub fn zoom_in(&mut self) -> f32 {
        let previous = self.factor.value();
        self.factor = self.factor.zoomed_in();
        self.factor.value() / previous
    }

    /// Applies one zoom-out step. Returns the ratio actually applied.
    pub fn zoom_out(&mut self) -> f32 {
        let previous = self.factor.value();
        self.factor = self.factor.zoomed_out();
        self.factor.value() / previous
    }

    /// Resets zoom to the original size.
    pub fn set_normal(&mut self) {
        self.factor = ZoomFactor::default();
    }

    /// Enables fit-to-window mode.
    pub fn enable_fit_to_window(&mut self) {
        self.fit_to_window = true;
    }

    /// Disables fit-to-window mode, returning to the original size as the
    /// manual baseline.
    pub fn disable_fit_to_window(&mut self) {
        self.fit_to_window = false;
        self.set_normal();
    }

    /// Whether the zoom-in action should be enabled.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        !self.fit_to_window && !self.factor.is_max()
    }

    /// Whether the zoom-out action should be enabled.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.fit_to_window && !self.factor.is_min()
    }

    /// Human-readable zoom percentage for the HUD, e.g. `125%`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.factor.value() * 100.0).round() as i32)
    }
}
