// SPDX-License-Identifier: MPL-2.0
//! Watermark assets and scaling.
//!
//! Two watermark variants ship embedded in the binary as SVG and are
//! rasterized at load time; a user-supplied raster or SVG file can replace
//! them via the `[watermark]` config section. The watermark keeps its
//! source pixels untouched and re-derives the scaled raster whenever the
//! scale factor changes, so repeated rescaling never accumulates
//! resampling loss.

use crate::app::config::{
    DEFAULT_MARK_FACTOR, MAX_MARK_FACTOR, MIN_MARK_FACTOR, ZOOM_IN_RATIO, ZOOM_OUT_RATIO,
};
use crate::error::{Error, Result};
use image_rs::imageops::FilterType;
use image_rs::RgbaImage;
use resvg::usvg;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/watermarks/"]
struct Asset;

/// Bundled watermark variants, mirroring the light/dark pairing of the
/// original assets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkVariant {
    #[default]
    Light,
    Dark,
}

impl WatermarkVariant {
    /// Returns the embedded asset filename for this variant.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            WatermarkVariant::Light => "light.svg",
            WatermarkVariant::Dark => "dark.svg",
        }
    }

    /// Returns the i18n key for this variant's menu entry.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            WatermarkVariant::Light => "menu-watermark-light",
            WatermarkVariant::Dark => "menu-watermark-dark",
        }
    }
}

/// Watermark scale factor, guaranteed to be within the valid range.
///
/// This type ensures that scale values are always valid, eliminating the
/// need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkFactor(f32);

impl MarkFactor {
    /// Creates a new scale factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_MARK_FACTOR, MAX_MARK_FACTOR))
    }

    /// Returns the raw factor value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_MARK_FACTOR
    }

    /// Returns whether the factor is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_MARK_FACTOR
    }

    /// Increases the factor by one step.
    #[must_use]
    pub fn scaled_up(self) -> Self {
        Self::new(self.0 * ZOOM_IN_RATIO)
    }

    /// Decreases the factor by one step.
    #[must_use]
    pub fn scaled_down(self) -> Self {
        Self::new(self.0 * ZOOM_OUT_RATIO)
    }
}

impl Default for MarkFactor {
    fn default() -> Self {
        Self(DEFAULT_MARK_FACTOR)
    }
}

/// A watermark with its source pixels and the raster derived for the
/// current scale factor.
#[derive(Debug, Clone)]
pub struct Watermark {
    source: RgbaImage,
    scaled: RgbaImage,
    factor: MarkFactor,
}

impl Watermark {
    /// Creates a watermark at its natural size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the source raster is empty.
    pub fn new(source: RgbaImage) -> Result<Self> {
        if source.width() == 0 || source.height() == 0 {
            return Err(Error::Decode("watermark has empty dimensions".into()));
        }
        let scaled = source.clone();
        Ok(Self {
            source,
            scaled,
            factor: MarkFactor::default(),
        })
    }

    /// Loads one of the bundled variants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if the embedded asset is missing or cannot be
    /// rasterized.
    pub fn bundled(variant: WatermarkVariant) -> Result<Self> {
        let asset = Asset::get(variant.asset_name())
            .ok_or_else(|| Error::Svg(format!("missing asset {}", variant.asset_name())))?;
        let source = rasterize_svg(asset.data.as_ref())?;
        Self::new(source)
    }

    /// Loads a user-supplied watermark file (raster or SVG).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, decoded, or rasterized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;

        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        let source = if is_svg {
            rasterize_svg(&bytes)?
        } else {
            image_rs::load_from_memory(&bytes)
                .map_err(|e| Error::Decode(e.to_string()))?
                .to_rgba8()
        };

        Self::new(source)
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn factor(&self) -> MarkFactor {
        self.factor
    }

    /// Returns the raster for the current scale factor.
    #[must_use]
    pub fn scaled(&self) -> &RgbaImage {
        &self.scaled
    }

    /// Sets the scale factor, re-deriving the scaled raster from the source.
    pub fn set_factor(&mut self, factor: MarkFactor) {
        if factor == self.factor && self.scaled.width() > 0 {
            return;
        }
        self.factor = factor;
        let width = scaled_dimension(self.source.width(), factor.value());
        let height = scaled_dimension(self.source.height(), factor.value());
        self.scaled =
            image_rs::imageops::resize(&self.source, width, height, FilterType::Triangle);
    }

    /// Increases the scale by one step. Returns whether the factor changed.
    pub fn scale_up(&mut self) -> bool {
        let next = self.factor.scaled_up();
        let changed = next != self.factor;
        if changed {
            self.set_factor(next);
        }
        changed
    }

    /// Decreases the scale by one step. Returns whether the factor changed.
    pub fn scale_down(&mut self) -> bool {
        let next = self.factor.scaled_down();
        let changed = next != self.factor;
        if changed {
            self.set_factor(next);
        }
        changed
    }

    /// Resets the scale factor to the natural size.
    pub fn reset_factor(&mut self) {
        self.set_factor(MarkFactor::default());
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_dimension(dimension: u32, factor: f32) -> u32 {
    ((dimension as f32 * factor).round() as u32).max(1)
}

/// Rasterizes SVG bytes at the document's intrinsic size.
fn rasterize_svg(data: &[u8]) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(width, height, pixmap.data().to_vec())
        .ok_or_else(|| Error::Svg("SVG pixmap size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    fn solid_mark(width: u32, height: u32) -> Watermark {
        let source = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        Watermark::new(source).expect("valid watermark")
    }

    #[test]
    fn mark_factor_clamps_to_bounds() {
        assert_eq!(MarkFactor::new(100.0).value(), MAX_MARK_FACTOR);
        assert_eq!(MarkFactor::new(0.0).value(), MIN_MARK_FACTOR);
    }

    #[test]
    fn repeated_scale_up_never_exceeds_max() {
        let mut mark = solid_mark(10, 10);
        for _ in 0..50 {
            mark.scale_up();
        }
        assert!(mark.factor().value() <= MAX_MARK_FACTOR);
        assert!(mark.factor().is_max());
    }

    #[test]
    fn repeated_scale_down_never_drops_below_min() {
        let mut mark = solid_mark(10, 10);
        for _ in 0..50 {
            mark.scale_down();
        }
        assert!(mark.factor().value() >= MIN_MARK_FACTOR);
        assert!(mark.factor().is_min());
    }

    #[test]
    fn scaling_rederives_from_source() {
        let mut mark = solid_mark(100, 40);

        mark.set_factor(MarkFactor::new(2.0));
        assert_eq!(mark.scaled().width(), 200);
        assert_eq!(mark.scaled().height(), 80);

        mark.reset_factor();
        assert_eq!(mark.scaled().width(), 100);
        assert_eq!(mark.scaled().height(), 40);
    }

    #[test]
    fn scale_up_at_max_reports_no_change() {
        let mut mark = solid_mark(10, 10);
        mark.set_factor(MarkFactor::new(MAX_MARK_FACTOR));
        assert!(!mark.scale_up());
    }

    #[test]
    fn bundled_variants_rasterize() {
        for variant in [WatermarkVariant::Light, WatermarkVariant::Dark] {
            let mark = Watermark::bundled(variant).expect("bundled asset should rasterize");
            assert!(mark.scaled().width() > 0);
            assert!(mark.scaled().height() > 0);
        }
    }

    #[test]
    fn from_path_loads_raster_file() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("mark.png");
        RgbaImage::from_pixel(6, 3, Rgba([0, 0, 0, 128]))
            .save(&path)
            .expect("write png");

        let mark = Watermark::from_path(&path).expect("raster watermark should load");
        assert_eq!(mark.scaled().width(), 6);
        assert_eq!(mark.scaled().height(), 3);
    }

    #[test]
    fn from_path_rejects_invalid_svg() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("broken.svg");
        std::fs::write(&path, "<svg>oops").expect("write svg");

        match Watermark::from_path(&path) {
            Err(Error::Svg(_)) => {}
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_is_rejected() {
        let source = RgbaImage::new(0, 0);
        assert!(matches!(Watermark::new(source), Err(Error::Decode(_))));
    }
}
