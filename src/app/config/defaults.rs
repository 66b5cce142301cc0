// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default zoom factor when opening an image (1.0 = original size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.333;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Multiplier applied per zoom-in step (wheel notch or menu action).
pub const ZOOM_IN_RATIO: f32 = 1.25;

/// Multiplier applied per zoom-out step (wheel notch or menu action).
pub const ZOOM_OUT_RATIO: f32 = 0.8;

/// Whether images open in fit-to-window mode by default.
pub const DEFAULT_FIT_TO_WINDOW: bool = false;

// ==========================================================================
// Watermark Defaults
// ==========================================================================

/// Default watermark scale factor (1.0 = natural asset size).
pub const DEFAULT_MARK_FACTOR: f32 = 1.0;

/// Minimum allowed watermark scale factor.
pub const MIN_MARK_FACTOR: f32 = 0.33;

/// Maximum allowed watermark scale factor.
pub const MAX_MARK_FACTOR: f32 = 3.0;

/// Opacity of the live watermark preview. Committed stamps are opaque.
pub const PREVIEW_OPACITY: f32 = 0.5;

// ==========================================================================
// Print Defaults
// ==========================================================================

/// Resolution used when composing the print page raster.
pub const PRINT_DPI: u32 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR < DEFAULT_ZOOM_FACTOR);
    assert!(MAX_ZOOM_FACTOR > DEFAULT_ZOOM_FACTOR);
    assert!(ZOOM_IN_RATIO > 1.0);
    assert!(ZOOM_OUT_RATIO < 1.0);
    assert!(ZOOM_OUT_RATIO > 0.0);

    // Watermark validation
    assert!(MIN_MARK_FACTOR > 0.0);
    assert!(MIN_MARK_FACTOR < DEFAULT_MARK_FACTOR);
    assert!(MAX_MARK_FACTOR > DEFAULT_MARK_FACTOR);
    assert!(PREVIEW_OPACITY > 0.0);
    assert!(PREVIEW_OPACITY < 1.0);

    // Print validation
    assert!(PRINT_DPI > 0);
};
