// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Viewer display settings (fit-to-window)
//! - `[watermark]` - Watermark variant and optional custom asset path
//! - `[print]` - Paper size for print-page composition
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_MARK_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::media::print::PaperSize;
use crate::media::watermark::WatermarkVariant;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when the config file exists but cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-warning";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether to fit images to the window by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_to_window: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fit_to_window: Some(DEFAULT_FIT_TO_WINDOW),
        }
    }
}

/// Watermark settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WatermarkConfig {
    /// Bundled watermark variant used when no custom path is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<WatermarkVariant>,

    /// Optional path to a user-supplied watermark image (raster or SVG).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<PathBuf>,
}

/// Print settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrintConfig {
    /// Paper size used when composing the print page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<PaperSize>,
}

/// Root configuration document persisted as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub watermark: WatermarkConfig,

    #[serde(default)]
    pub print: PrintConfig,
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the platform config directory.
///
/// A missing file yields defaults without a warning; an unreadable or
/// unparsable file yields defaults plus a warning key the caller should
/// surface to the user.
pub fn load() -> (Config, Option<&'static str>) {
    match config_file_path() {
        Some(path) => load_from_path(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit path (used by tests).
pub fn load_from_path(path: &Path) -> (Config, Option<&'static str>) {
    if !path.exists() {
        return (Config::default(), None);
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("failed to read config {}: {}", path.display(), err);
            return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY));
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("failed to parse config {}: {}", path.display(), err);
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY))
        }
    }
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the config directory cannot be resolved or created,
/// or if serialization or the file write fails.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("could not resolve config directory".into()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path (used by tests).
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, or if
/// serialization or the file write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("settings.toml");

        let (config, warning) = load_from_path(&path);

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.display.fit_to_window = Some(true);
        config.watermark.variant = Some(WatermarkVariant::Dark);
        config.print.paper = Some(PaperSize::Letter);

        save_to_path(&config, &path).expect("save should succeed");
        let (loaded, warning) = load_from_path(&path);

        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn malformed_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "this is { not toml").expect("write");

        let (config, warning) = load_from_path(&path);

        assert_eq!(config, Config::default());
        assert_eq!(warning, Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[general]\nlanguage = \"en-US\"\nfuture_setting = 42\n",
        )
        .expect("write");

        let (config, warning) = load_from_path(&path);

        assert_eq!(config.general.language.as_deref(), Some("en-US"));
        assert!(warning.is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save should succeed");

        assert!(path.exists());
    }
}
