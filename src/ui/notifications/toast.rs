// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for the notification stack.

use super::{Manager, NotificationMessage};
use crate::i18n::fluent::I18n;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Element, Length, Theme,
};

const TOAST_WIDTH: f32 = 360.0;

/// Renders the notification stack anchored to the bottom-right corner.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, NotificationMessage> {
    let mut stack = Column::new().spacing(8).width(Length::Shrink);

    for notification in manager.iter() {
        let args: Vec<(&str, String)> = notification
            .message_args()
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();
        let message = if args.is_empty() {
            i18n.tr(notification.message_key())
        } else {
            i18n.tr_args(notification.message_key(), &args)
        };

        let accent = notification.severity().color();
        let dismiss = button(Text::new("✕").size(12))
            .on_press(NotificationMessage::Dismiss(notification.id()))
            .padding(4);

        let row = Row::new()
            .spacing(8)
            .align_y(Vertical::Center)
            .push(Text::new(message).width(Length::Fill))
            .push(dismiss);

        let toast = Container::new(row)
            .width(Length::Fixed(TOAST_WIDTH))
            .padding(10)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.1, 0.1, 0.1, 0.92))),
                text_color: Some(Color::WHITE),
                border: Border {
                    color: accent,
                    width: 1.5,
                    radius: 6.0.into(),
                },
                ..Default::default()
            });

        stack = stack.push(toast);
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(16)
        .into()
}
