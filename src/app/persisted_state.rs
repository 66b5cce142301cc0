// SPDX-License-Identifier: MPL-2.0
//! Non-preference application state persisted between runs.
//!
//! Unlike `settings.toml` (user preferences), `state.toml` records
//! incidental state such as the directories last used by the open and
//! save dialogs. It lives in the platform data directory and failures to
//! read or write it are never fatal; they are surfaced as warning keys.

use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.toml";

/// Warning key surfaced when the state file exists but cannot be used.
pub const STATE_LOAD_WARNING_KEY: &str = "notification-state-load-warning";

/// Warning key surfaced when the state file cannot be written.
pub const STATE_SAVE_WARNING_KEY: &str = "notification-state-save-warning";

/// Persisted application state (dialog directories).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory last used by the open dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_open_directory: Option<PathBuf>,

    /// Directory last used by the save dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save_directory: Option<PathBuf>,
}

fn state_file_path() -> Option<PathBuf> {
    paths::get_app_data_dir().map(|dir| dir.join(STATE_FILE))
}

impl AppState {
    /// Loads the persisted state, falling back to defaults.
    pub fn load() -> (Self, Option<&'static str>) {
        match state_file_path() {
            Some(path) => Self::load_from_path(&path),
            None => (Self::default(), None),
        }
    }

    /// Loads the persisted state from an explicit path (used by tests).
    pub fn load_from_path(path: &Path) -> (Self, Option<&'static str>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("failed to read state {}: {}", path.display(), err);
                return (Self::default(), Some(STATE_LOAD_WARNING_KEY));
            }
        };

        match toml::from_str(&contents) {
            Ok(state) => (state, None),
            Err(err) => {
                log::warn!("failed to parse state {}: {}", path.display(), err);
                (Self::default(), Some(STATE_LOAD_WARNING_KEY))
            }
        }
    }

    /// Saves the persisted state, returning a warning key on failure.
    #[must_use]
    pub fn save(&self) -> Option<&'static str> {
        match state_file_path() {
            Some(path) => self.save_to_path(&path),
            None => Some(STATE_SAVE_WARNING_KEY),
        }
    }

    /// Saves the persisted state to an explicit path (used by tests).
    #[must_use]
    pub fn save_to_path(&self, path: &Path) -> Option<&'static str> {
        let write = || -> crate::error::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string_pretty(self)?;
            fs::write(path, contents)?;
            Ok(())
        };

        match write() {
            Ok(()) => None,
            Err(err) => {
                log::warn!("failed to write state {}: {}", path.display(), err);
                Some(STATE_SAVE_WARNING_KEY)
            }
        }
    }

    /// Remembers the directory containing `file` for the next open dialog.
    pub fn set_last_open_directory_from_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the directory containing `file` for the next save dialog.
    pub fn set_last_save_directory_from_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}
