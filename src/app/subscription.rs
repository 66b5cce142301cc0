// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window, mouse, and keyboard events are routed to the viewer
//! component as raw-event messages; the Elm-style dispatch here replaces
//! the event-handler overriding the original design relied on.

use super::{Message, Screen};
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// - Viewer: routes all events including wheel scroll for zoom, plus file
///   drops.
/// - About: routes only non-wheel events so its scrollable content keeps
///   the wheel.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            // Wheel scroll is always routed so zoom overrides the scrollable
            if matches!(
                event,
                event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
            ) {
                return Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }));
            }

            match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            }
        }),
        Screen::About => event::listen_with(|event, status, window_id| {
            if matches!(
                event,
                event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
            ) {
                return None;
            }

            match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            }
        }),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
