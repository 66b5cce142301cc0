// SPDX-License-Identifier: MPL-2.0
use iced_mark::app::config::{self, Config, MAX_MARK_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};
use iced_mark::i18n::fluent::I18n;
use iced_mark::media::watermark::{MarkFactor, Watermark, WatermarkVariant};
use iced_mark::media::{export, load_image, StampCanvas};
use iced_mark::ui::state::ZoomState;
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let (loaded_initial_config, _) = config::load_from_path(&temp_config_file_path);
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let (loaded_french_config, _) = config::load_from_path(&temp_config_file_path);
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn zoom_factor_stays_bounded_under_sustained_stepping() {
    let mut zoom = ZoomState::default();

    for _ in 0..1000 {
        zoom.zoom_in();
        assert!(zoom.factor.value() <= MAX_ZOOM_FACTOR);
        assert!(zoom.factor.value() >= MIN_ZOOM_FACTOR);
    }
    for _ in 0..1000 {
        zoom.zoom_out();
        assert!(zoom.factor.value() <= MAX_ZOOM_FACTOR);
        assert!(zoom.factor.value() >= MIN_ZOOM_FACTOR);
    }
}

#[test]
fn mark_factor_stays_bounded_under_sustained_stepping() {
    let mut factor = MarkFactor::default();

    for _ in 0..1000 {
        factor = factor.scaled_up();
        assert!(factor.value() <= MAX_MARK_FACTOR);
    }
    assert!(factor.is_max());
}

#[test]
fn stamp_commit_survives_export_round_trip() {
    let dir = tempdir().expect("temp dir");

    // Decode a real PNG from disk, stamp it, export it, and reload it
    let source_path = dir.path().join("source.png");
    RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 255]))
        .save(&source_path)
        .expect("write source png");

    let data = load_image(&source_path).expect("decode source");
    let mut canvas = StampCanvas::new(data).expect("canvas");

    let mark = Watermark::new(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])))
        .expect("watermark");
    canvas.commit(&mark, (16.0, 16.0));

    let export_path = dir.path().join("out.png");
    export::save_buffer(canvas.committed(), &export_path).expect("export");

    let reloaded = image_rs::open(&export_path).expect("reload").to_rgba8();
    assert_eq!(*reloaded.get_pixel(16, 16), Rgba([255, 255, 255, 255]));
    assert_eq!(*reloaded.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn preview_is_never_exported() {
    let mut canvas = StampCanvas::from_rgba(RgbaImage::from_pixel(
        16,
        16,
        Rgba([0, 0, 0, 255]),
    ));
    let mark = Watermark::new(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])))
        .expect("watermark");

    canvas.preview(&mark, (8.0, 8.0));

    let dir = tempdir().expect("temp dir");
    let export_path = dir.path().join("out.png");
    export::save_buffer(canvas.committed(), &export_path).expect("export");

    let reloaded = image_rs::open(&export_path).expect("reload").to_rgba8();
    assert_eq!(*reloaded.get_pixel(8, 8), Rgba([0, 0, 0, 255]));
}

#[test]
fn bundled_watermark_variants_are_distinct() {
    let light = Watermark::bundled(WatermarkVariant::Light).expect("light variant");
    let dark = Watermark::bundled(WatermarkVariant::Dark).expect("dark variant");

    assert_eq!(light.scaled().dimensions(), dark.scaled().dimensions());
    assert_ne!(light.scaled().as_raw(), dark.scaled().as_raw());
}

#[test]
fn watermark_config_round_trips() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.watermark.variant = Some(WatermarkVariant::Dark);
    config.watermark.custom_path = Some(dir.path().join("mark.png"));
    config::save_to_path(&config, &path).expect("save");

    let (loaded, warning) = config::load_from_path(&path);
    assert!(warning.is_none());
    assert_eq!(loaded.watermark.variant, Some(WatermarkVariant::Dark));
    assert_eq!(loaded.watermark.custom_path, config.watermark.custom_path);
}
