// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::about;
use crate::ui::menu;
use crate::ui::notifications;
use crate::ui::viewer::component;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Menu(menu::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
    /// Result from spooling a print job.
    PrintCompleted(Result<(), Error>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_MARK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `ICED_MARK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
