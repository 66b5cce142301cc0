// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the stamping canvas, the active watermark, and the
//! zoom/viewport/gesture state. Raw window events arrive as messages; the
//! component mutates its state and reports side effects the application
//! shell must perform (dialogs, persistence, printing, quitting).

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::watermark::{Watermark, WatermarkVariant};
use crate::media::{ImageData, StampCanvas};
use crate::ui::state::{StampState, ViewportState, ZoomState};
use crate::ui::viewer::state::ViewerGeometry;
use crate::ui::viewer::pane;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, window, Element, Point, Rectangle, Task};
use std::path::PathBuf;

/// Identifier used for the viewer scrollable widget.
pub const SCROLLABLE_ID: &str = "viewer-image-scrollable";

/// Wheel pixels that count as one zoom step on touchpad-style deltas.
const PIXELS_PER_SCROLL_STEP: f32 = 20.0;

/// Messages consumed by the viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    /// An image finished decoding. The path is only adopted on success so
    /// a failed open leaves the previous state untouched.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    ZoomIn,
    ZoomOut,
    NormalSize,
    SetFitToWindow(bool),
    /// Request to open the file dialog from the empty state.
    OpenFileRequested,
}

/// Side effects the application should perform after handling a viewer
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist display preferences (fit-to-window flag).
    PersistPreferences,
    /// Open the file dialog.
    OpenFileDialog,
    /// Open the save dialog for the committed buffer.
    RequestSave,
    /// Print the committed buffer.
    RequestPrint,
    /// Switch to the given bundled watermark variant.
    SelectWatermark(WatermarkVariant),
    /// Show a notification with the given i18n key.
    ShowNotification { key: &'static str },
    /// Close the application.
    Quit,
}

/// Environment needed to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Viewer component state.
pub struct State {
    canvas: Option<StampCanvas>,
    watermark: Option<Watermark>,
    active_variant: WatermarkVariant,
    pub current_image_path: Option<PathBuf>,
    pub zoom: ZoomState,
    viewport: ViewportState,
    stamp: StampState,
    cursor_position: Option<Point>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            canvas: None,
            watermark: None,
            active_variant: WatermarkVariant::default(),
            current_image_path: None,
            zoom: ZoomState::default(),
            viewport: ViewportState::default(),
            stamp: StampState::default(),
            cursor_position: None,
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.canvas.is_some()
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&StampCanvas> {
        self.canvas.as_ref()
    }

    #[must_use]
    pub fn watermark(&self) -> Option<&Watermark> {
        self.watermark.as_ref()
    }

    #[must_use]
    pub fn active_variant(&self) -> WatermarkVariant {
        self.active_variant
    }

    /// Installs a watermark, carrying the previous scale factor over so a
    /// variant switch keeps the on-screen size.
    pub fn set_watermark(&mut self, mut watermark: Watermark, variant: WatermarkVariant) {
        if let Some(previous) = &self.watermark {
            watermark.set_factor(previous.factor());
        }
        self.watermark = Some(watermark);
        self.active_variant = variant;
        self.refresh_preview();
    }

    #[must_use]
    pub fn zoom_state(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn zoom_state_mut(&mut self) -> &mut ZoomState {
        &mut self.zoom
    }

    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_state_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    #[must_use]
    pub fn stamp_state(&self) -> &StampState {
        &self.stamp
    }

    pub fn set_cursor_position(&mut self, position: Option<Point>) {
        self.cursor_position = position;
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }

    pub fn enable_fit_to_window(&mut self) {
        self.zoom.enable_fit_to_window();
    }

    pub fn disable_fit_to_window(&mut self) {
        self.zoom.disable_fit_to_window();
    }

    fn geometry(&self) -> ViewerGeometry<'_> {
        ViewerGeometry::new(
            self.canvas.as_ref().map(|c| (c.width(), c.height())),
            &self.viewport,
            &self.zoom,
            self.cursor_position,
        )
    }

    /// Redraws the active preview after the watermark changed (scale step
    /// or variant switch).
    fn refresh_preview(&mut self) {
        if let (Some(canvas), Some(mark)) = (self.canvas.as_mut(), self.watermark.as_ref()) {
            if let Some(center) = self.stamp.preview_center {
                canvas.preview(mark, center);
            }
        }
    }

    pub fn handle_message(&mut self, message: Message, _i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::ImageLoaded { path, result } => self.handle_image_loaded(path, result),
            Message::ViewportChanged { bounds, offset } => {
                self.viewport.update(bounds, offset);
                (Effect::None, Task::none())
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::ZoomIn => self.handle_zoom_step(true),
            Message::ZoomOut => self.handle_zoom_step(false),
            Message::NormalSize => self.handle_normal_size(),
            Message::SetFitToWindow(enabled) => self.handle_set_fit(enabled),
            Message::OpenFileRequested => (Effect::OpenFileDialog, Task::none()),
        }
    }

    fn handle_image_loaded(
        &mut self,
        path: PathBuf,
        result: Result<ImageData, Error>,
    ) -> (Effect, Task<Message>) {
        let data = match result {
            Ok(data) => data,
            Err(error) => {
                let key = match error {
                    Error::Io(_) => "notification-load-error-io",
                    _ => "notification-load-error-decode",
                };
                return (Effect::ShowNotification { key }, Task::none());
            }
        };

        let canvas = match StampCanvas::new(data) {
            Ok(canvas) => canvas,
            Err(_) => {
                return (
                    Effect::ShowNotification {
                        key: "notification-load-error-decode",
                    },
                    Task::none(),
                );
            }
        };

        self.canvas = Some(canvas);
        self.current_image_path = Some(path);

        // All scale state returns to 1.0 for a fresh image
        self.zoom.set_normal();
        if let Some(mark) = self.watermark.as_mut() {
            mark.reset_factor();
        }
        self.stamp.reset();
        self.viewport.reset_offset();

        (Effect::None, snap_to_origin())
    }

    fn handle_zoom_step(&mut self, zoom_in: bool) -> (Effect, Task<Message>) {
        let allowed = if zoom_in {
            self.zoom.can_zoom_in()
        } else {
            self.zoom.can_zoom_out()
        };
        if !self.has_image() || !allowed {
            return (Effect::None, Task::none());
        }

        let ratio = if zoom_in {
            self.zoom.zoom_in()
        } else {
            self.zoom.zoom_out()
        };

        let content = self
            .geometry()
            .scaled_size()
            .unwrap_or(iced::Size::new(0.0, 0.0));
        let offset = self.viewport.rescale_offset(ratio, content);
        (
            Effect::None,
            operation::scroll_to(Id::new(SCROLLABLE_ID), offset),
        )
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                let bounds = Rectangle::new(Point::new(0.0, 0.0), size);
                self.viewport.update(bounds, self.viewport.offset);
                (Effect::None, Task::none())
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard_event(keyboard_event),
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) -> (Effect, Task<Message>) {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                if self.stamp.modifier_held {
                    self.update_preview_at_cursor();
                }
                (Effect::None, Task::none())
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.drop_preview();
                (Effect::None, Task::none())
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if self.stamp.modifier_held {
                    self.commit_at_cursor();
                }
                (Effect::None, Task::none())
            }
            mouse::Event::WheelScrolled { delta } => self.handle_wheel(delta),
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_keyboard_event(&mut self, event: keyboard::Event) -> (Effect, Task<Message>) {
        match event {
            keyboard::Event::ModifiersChanged(modifiers) => {
                let released = self.stamp.set_modifier(modifiers.control());
                if released {
                    if let Some(canvas) = self.canvas.as_mut() {
                        canvas.clear_preview();
                    }
                } else if self.stamp.modifier_held {
                    self.update_preview_at_cursor();
                }
                (Effect::None, Task::none())
            }
            keyboard::Event::KeyPressed { key, modifiers, .. } if modifiers.command() => {
                self.handle_shortcut(&key)
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_shortcut(&mut self, key: &keyboard::Key) -> (Effect, Task<Message>) {
        let keyboard::Key::Character(character) = key else {
            return (Effect::None, Task::none());
        };

        match character.as_str() {
            "o" => (Effect::OpenFileDialog, Task::none()),
            "s" if self.has_image() => (Effect::RequestSave, Task::none()),
            "p" if self.has_image() => (Effect::RequestPrint, Task::none()),
            "q" => (Effect::Quit, Task::none()),
            "w" => (
                Effect::SelectWatermark(WatermarkVariant::Light),
                Task::none(),
            ),
            "b" => (
                Effect::SelectWatermark(WatermarkVariant::Dark),
                Task::none(),
            ),
            "n" => self.handle_normal_size(),
            "f" => {
                let target = !self.zoom.fit_to_window;
                self.handle_set_fit(target)
            }
            "+" | "=" => self.handle_zoom_step(true),
            "-" => self.handle_zoom_step(false),
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_normal_size(&mut self) -> (Effect, Task<Message>) {
        if !self.has_image() || self.zoom.fit_to_window {
            return (Effect::None, Task::none());
        }
        self.zoom.set_normal();
        self.viewport.reset_offset();
        (Effect::None, snap_to_origin())
    }

    fn handle_set_fit(&mut self, enabled: bool) -> (Effect, Task<Message>) {
        if !self.has_image() {
            return (Effect::None, Task::none());
        }
        if enabled {
            self.zoom.enable_fit_to_window();
        } else {
            self.zoom.disable_fit_to_window();
        }
        self.viewport.reset_offset();
        (Effect::PersistPreferences, snap_to_origin())
    }

    fn handle_wheel(&mut self, delta: mouse::ScrollDelta) -> (Effect, Task<Message>) {
        let steps = scroll_steps(delta);
        if steps.abs() < f32::EPSILON {
            return (Effect::None, Task::none());
        }

        if self.stamp.modifier_held {
            // Modifier wheel rescales the watermark, not the image
            let Some(mark) = self.watermark.as_mut() else {
                return (Effect::None, Task::none());
            };
            let changed = if steps > 0.0 {
                mark.scale_up()
            } else {
                mark.scale_down()
            };
            if changed {
                self.refresh_preview();
            }
            return (Effect::None, Task::none());
        }

        if !self.geometry().is_cursor_over_image() {
            return (Effect::None, Task::none());
        }

        self.handle_zoom_step(steps > 0.0)
    }

    fn update_preview_at_cursor(&mut self) {
        let Some(cursor) = self.cursor_position else {
            return;
        };
        let center = self.geometry().cursor_to_image(cursor);

        match center {
            Some(center) => {
                if let (Some(canvas), Some(mark)) =
                    (self.canvas.as_mut(), self.watermark.as_ref())
                {
                    self.stamp.show_preview(center);
                    canvas.preview(mark, center);
                }
            }
            None => self.drop_preview(),
        }
    }

    fn drop_preview(&mut self) {
        self.stamp.clear_preview();
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear_preview();
        }
    }

    fn commit_at_cursor(&mut self) {
        let Some(cursor) = self.cursor_position else {
            return;
        };
        let Some(center) = self.geometry().cursor_to_image(cursor) else {
            return;
        };

        if let (Some(canvas), Some(mark)) = (self.canvas.as_mut(), self.watermark.as_ref()) {
            canvas.commit(mark, center);
            self.stamp.clear_preview();
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match self.canvas.as_ref() {
            Some(canvas) => pane::view(pane::ViewContext {
                i18n: env.i18n,
                scrollable_id: SCROLLABLE_ID,
                canvas,
                zoom: &self.zoom,
                stamping: self.stamp.modifier_held,
                cursor_over_image: self.geometry().is_cursor_over_image(),
            }),
            None => pane::empty_view(env.i18n),
        }
    }
}

fn snap_to_origin() -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
}

fn scroll_steps(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_SCROLL_STEP,
    }
}
