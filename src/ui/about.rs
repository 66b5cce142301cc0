// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information.

use crate::i18n::fluent::I18n;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL.
const REPOSITORY_URL: &str = "https://codeberg.org/Bawycle/iced_mark";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToViewer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToViewer,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToViewer => Event::BackToViewer,
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(text(format!(
        "← {}",
        ctx.i18n.tr("about-back-to-viewer-button")
    )))
    .on_press(Message::BackToViewer);

    let title = Text::new(ctx.i18n.tr("about-title")).size(28);

    let app_line = Row::new()
        .spacing(8)
        .push(Text::new(ctx.i18n.tr("about-app-name")).size(20))
        .push(Text::new(format!("v{APP_VERSION}")));

    let description = Text::new(ctx.i18n.tr("about-app-description"));
    let gestures = Text::new(ctx.i18n.tr("about-gestures"));
    let license = Text::new(ctx.i18n.tr("about-license"));
    let repository = Text::new(REPOSITORY_URL);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(16)
        .align_x(Horizontal::Left)
        .padding(24)
        .push(back_button)
        .push(title)
        .push(app_line)
        .push(description)
        .push(gestures)
        .push(license)
        .push(repository);

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_message_maps_to_back_event() {
        assert!(matches!(
            update(&Message::BackToViewer),
            Event::BackToViewer
        ));
    }
}
