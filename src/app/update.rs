// SPDX-License-Identifier: MPL-2.0
//! Update handlers that translate messages and viewer effects into state
//! changes and side-effect tasks (dialogs, persistence, printing).

use super::{App, Message};
use crate::app::config;
use crate::media::watermark::{Watermark, WatermarkVariant};
use crate::media::{self, export, extensions, print};
use crate::ui::about;
use crate::ui::menu;
use crate::ui::notifications::Notification;
use crate::ui::viewer::component::{self, Effect};
use iced::Task;
use std::path::PathBuf;

/// Handles a viewer component message and the effect it produces.
pub(super) fn handle_viewer_message(app: &mut App, message: component::Message) -> Task<Message> {
    // Successful opens update the remembered dialog directory
    if let component::Message::ImageLoaded {
        path,
        result: Ok(_),
    } = &message
    {
        app.app_state.set_last_open_directory_from_file(path);
        if let Some(key) = app.app_state.save() {
            app.notifications.push(Notification::warning(key));
        }
    }

    let (effect, task) = app.viewer.handle_message(message, &app.i18n);
    let effect_task = handle_viewer_effect(app, effect);

    Task::batch([task.map(Message::Viewer), effect_task])
}

/// Performs the side effect requested by the viewer component.
pub(super) fn handle_viewer_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::PersistPreferences => {
            persist_display_preferences(app);
            Task::none()
        }
        Effect::OpenFileDialog => {
            open_file_dialog_task(app.app_state.last_open_directory.clone())
        }
        Effect::RequestSave => save_dialog_task(app),
        Effect::RequestPrint => print_task(app),
        Effect::SelectWatermark(variant) => {
            switch_watermark(app, variant);
            Task::none()
        }
        Effect::ShowNotification { key } => {
            app.notifications.push(Notification::error(key));
            Task::none()
        }
        Effect::Quit => iced::exit(),
    }
}

/// Handles a menu bar message.
pub(super) fn handle_menu_message(app: &mut App, message: menu::Message) -> Task<Message> {
    let event = menu::update(message, &mut app.open_menu);

    match event {
        menu::Event::None => Task::none(),
        menu::Event::OpenFile => {
            open_file_dialog_task(app.app_state.last_open_directory.clone())
        }
        menu::Event::SaveAs => save_dialog_task(app),
        menu::Event::Print => print_task(app),
        menu::Event::Quit => iced::exit(),
        menu::Event::ZoomIn => forward_to_viewer(app, component::Message::ZoomIn),
        menu::Event::ZoomOut => forward_to_viewer(app, component::Message::ZoomOut),
        menu::Event::NormalSize => forward_to_viewer(app, component::Message::NormalSize),
        menu::Event::ToggleFitToWindow => {
            let target = !app.viewer.zoom_state().fit_to_window;
            forward_to_viewer(app, component::Message::SetFitToWindow(target))
        }
        menu::Event::SelectVariant(variant) => {
            switch_watermark(app, variant);
            Task::none()
        }
        menu::Event::OpenAbout => {
            app.screen = super::Screen::About;
            Task::none()
        }
    }
}

/// Handles an about screen message.
pub(super) fn handle_about_message(app: &mut App, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        about::Event::BackToViewer => {
            app.screen = super::Screen::Viewer;
            Task::none()
        }
        about::Event::None => Task::none(),
    }
}

fn forward_to_viewer(app: &mut App, message: component::Message) -> Task<Message> {
    handle_viewer_message(app, message)
}

/// Writes the display section of the config, surfacing failures as a
/// warning toast.
pub(super) fn persist_display_preferences(app: &mut App) {
    app.config.display.fit_to_window = Some(app.viewer.zoom_state().fit_to_window);
    if config::save(&app.config).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-warning"));
    }
}

/// Spawns the async open dialog restricted to the supported raster
/// formats.
pub(super) fn open_file_dialog_task(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", extensions::IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub(super) fn handle_open_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_image_task(path)
}

/// Spawns the async decode of `path` and routes the result to the viewer.
pub(super) fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::load_image(&path);
            (path, result)
        },
        |(path, result)| Message::Viewer(component::Message::ImageLoaded { path, result }),
    )
}

/// Spawns the async save dialog for the committed buffer.
pub(super) fn save_dialog_task(app: &App) -> Task<Message> {
    if !app.viewer.has_image() {
        return Task::none();
    }

    let filename =
        export::default_stamped_filename(app.viewer.current_image_path.as_deref());
    let last_directory = app.app_state.last_save_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);
            for (name, exts) in extensions::IMAGE_SAVE_FILTERS {
                dialog = dialog.add_filter(*name, exts);
            }

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Handles the result of the save dialog by exporting the committed buffer.
pub(super) fn handle_save_dialog_result(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    let Some(canvas) = app.viewer.canvas() else {
        return Task::none();
    };

    match export::save_buffer(canvas.committed(), &path) {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-save-success"));

            app.app_state.set_last_save_directory_from_file(&path);
            if let Some(key) = app.app_state.save() {
                app.notifications.push(Notification::warning(key));
            }
        }
        Err(err) => {
            log::warn!("failed to save image to {}: {}", path.display(), err);
            app.notifications
                .push(Notification::error("notification-save-error"));
        }
    }

    Task::none()
}

/// Spawns the print job for the committed buffer.
pub(super) fn print_task(app: &App) -> Task<Message> {
    let Some(canvas) = app.viewer.canvas() else {
        return Task::none();
    };

    let buffer = canvas.committed().clone();
    let paper = app.config.print.paper.unwrap_or_default();

    Task::perform(
        async move { print::print_image(&buffer, paper) },
        Message::PrintCompleted,
    )
}

/// Surfaces the print result as a toast.
pub(super) fn handle_print_completed(
    app: &mut App,
    result: Result<(), crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-print-success"));
        }
        Err(crate::error::Error::Print(print_error)) => {
            app.notifications
                .push(Notification::error(print_error.i18n_key()));
        }
        Err(err) => {
            log::warn!("print failed: {}", err);
            app.notifications
                .push(Notification::error("notification-print-error"));
        }
    }
    Task::none()
}

/// Loads a dropped file when it carries a supported extension.
pub(super) fn handle_file_dropped(app: &mut App, path: PathBuf) -> Task<Message> {
    if extensions::is_supported_image(&path) {
        load_image_task(path)
    } else {
        app.notifications
            .push(Notification::warning("notification-unsupported-file"));
        Task::none()
    }
}

/// Switches the active bundled watermark variant and persists the choice.
pub(super) fn switch_watermark(app: &mut App, variant: WatermarkVariant) {
    match Watermark::bundled(variant) {
        Ok(mark) => {
            app.viewer.set_watermark(mark, variant);
            app.config.watermark.variant = Some(variant);
            app.config.watermark.custom_path = None;
            if config::save(&app.config).is_err() {
                app.notifications
                    .push(Notification::warning("notification-config-save-warning"));
            }
        }
        Err(err) => {
            log::warn!("failed to load watermark variant: {}", err);
            app.notifications
                .push(Notification::error("notification-watermark-error"));
        }
    }
}
