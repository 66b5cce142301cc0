// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the canvas inside the scrollable area with
//! centering, cursor interaction, and the empty state.

use crate::i18n::fluent::I18n;
use crate::media::StampCanvas;
use crate::ui::state::ZoomState;
use crate::ui::viewer::component::Message;
use iced::mouse;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, mouse_area, responsive, Column, Container, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Element, Length, Padding, Size,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scrollable_id: &'static str,
    pub canvas: &'a StampCanvas,
    pub zoom: &'a ZoomState,
    /// Whether the stamp modifier is held (switches the cursor).
    pub stamping: bool,
    pub cursor_over_image: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // The responsive widget reports the available size so fit-to-window can
    // be computed at render time
    responsive(move |available_size: Size| view_inner(&ctx, available_size)).into()
}

/// Calculate the zoom factor needed to fit the canvas within the available
/// space.
#[allow(clippy::cast_precision_loss)]
fn calculate_fit_factor(canvas_width: u32, canvas_height: u32, available: Size) -> f32 {
    if canvas_width == 0 || canvas_height == 0 || available.width <= 0.0 || available.height <= 0.0
    {
        return 1.0;
    }

    let scale_x = available.width / canvas_width as f32;
    let scale_y = available.height / canvas_height as f32;
    let scale = scale_x.min(scale_y);

    if !scale.is_finite() || scale <= 0.0 {
        return 1.0;
    }

    scale
}

/// Calculate padding to center the image within the available space.
fn calculate_centering_padding(image_size: Size, available: Size) -> Padding {
    let horizontal = ((available.width - image_size.width) / 2.0).max(0.0);
    let vertical = ((available.height - image_size.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

#[allow(clippy::cast_precision_loss)]
fn view_inner<'a>(ctx: &ViewContext<'a>, available_size: Size) -> Element<'a, Message> {
    let effective_factor = if ctx.zoom.fit_to_window {
        calculate_fit_factor(ctx.canvas.width(), ctx.canvas.height(), available_size)
    } else {
        ctx.zoom.factor.value()
    };

    let scaled_size = Size::new(
        (ctx.canvas.width() as f32 * effective_factor).max(1.0),
        (ctx.canvas.height() as f32 * effective_factor).max(1.0),
    );
    let effective_padding = calculate_centering_padding(scaled_size, available_size);

    let image = super::view_image(ctx.canvas.display(), effective_factor);
    let image_container = Container::new(image).padding(effective_padding);

    let scrollable = Scrollable::new(image_container)
        .id(Id::new(ctx.scrollable_id))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| {
            let bounds = viewport.bounds();
            Message::ViewportChanged {
                bounds,
                offset: viewport.absolute_offset(),
            }
        });

    let cursor_interaction = if ctx.stamping && ctx.cursor_over_image {
        mouse::Interaction::Crosshair
    } else {
        mouse::Interaction::default()
    };

    mouse_area(scrollable).interaction(cursor_interaction).into()
}

/// Placeholder shown before any image has been opened.
pub fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    let heading = Text::new(i18n.tr("empty-state-heading")).size(24);
    let hint = Text::new(i18n.tr("empty-state-hint"));
    let open_button =
        button(Text::new(i18n.tr("empty-state-open-button"))).on_press(Message::OpenFileRequested);

    let content = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(hint)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
