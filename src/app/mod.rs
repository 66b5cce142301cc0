// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer, menu, and
//! about screens.
//!
//! The `App` struct wires together the domains (viewer, localization,
//! preferences) and translates messages into side effects like config
//! persistence, image loading, export, and printing. Policy decisions
//! (window sizing, persistence format, locale switching) stay close to the
//! main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::media::watermark::Watermark;
use crate::ui::menu::MenuId;
use crate::ui::notifications;
use crate::ui::theme::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    viewer: component::State,
    /// Which menu dropdown is open, if any.
    open_menu: Option<MenuId>,
    theme_mode: ThemeMode,
    /// Loaded configuration, kept so partial updates can be written back.
    config: config::Config,
    /// Persisted application state (last dialog directories).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewer_has_image", &self.viewer.has_image())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let mut viewer = component::State::new();
        if let Ok(mark) = Watermark::bundled(Default::default()) {
            viewer.set_watermark(mark, Default::default());
        }

        Self {
            i18n: I18n::default(),
            screen: Screen::Viewer,
            viewer,
            open_menu: None,
            theme_mode: ThemeMode::default(),
            config: config::Config::default(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            viewer: component::State::new(),
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        match config.display.fit_to_window {
            Some(true) => app.viewer.enable_fit_to_window(),
            Some(false) | None => app.viewer.disable_fit_to_window(),
        }

        app.install_watermark(&config);
        app.config = config;

        // Load application state (last dialog directories)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path_str) => update::load_image_task(std::path::PathBuf::from(path_str)),
            None => Task::none(),
        };

        (app, task)
    }

    /// Loads the configured watermark: a custom file when set, otherwise
    /// the bundled variant. Failures fall back to the bundled asset with a
    /// warning so stamping stays available.
    fn install_watermark(&mut self, config: &config::Config) {
        let variant = config.watermark.variant.unwrap_or_default();

        if let Some(custom_path) = &config.watermark.custom_path {
            match Watermark::from_path(custom_path) {
                Ok(mark) => {
                    self.viewer.set_watermark(mark, variant);
                    return;
                }
                Err(err) => {
                    log::warn!(
                        "failed to load custom watermark {}: {}",
                        custom_path.display(),
                        err
                    );
                    self.notifications.push(notifications::Notification::warning(
                        "notification-watermark-custom-warning",
                    ));
                }
            }
        }

        match Watermark::bundled(variant) {
            Ok(mark) => self.viewer.set_watermark(mark, variant),
            Err(err) => {
                log::warn!("failed to load bundled watermark: {}", err);
                self.notifications
                    .push(notifications::Notification::error(
                        "notification-watermark-error",
                    ));
            }
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self.viewer.current_image_path.as_ref().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(self, viewer_message)
            }
            Message::Menu(menu_message) => update::handle_menu_message(self, menu_message),
            Message::About(about_message) => update::handle_about_message(self, &about_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => {
                self.screen = target;
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(path)
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(self, path),
            Message::PrintCompleted(result) => update::handle_print_completed(self, result),
            Message::FileDropped(path) => update::handle_file_dropped(self, path),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: &self.viewer,
            open_menu: self.open_menu,
            notifications: &self.notifications,
        })
    }
}
