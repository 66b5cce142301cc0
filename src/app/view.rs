// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::menu::{self, MenuId, ViewContext as MenuViewContext};
use crate::ui::notifications;
use crate::ui::viewer::component;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: &'a component::State,
    pub open_menu: Option<MenuId>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => view_viewer(&ctx),
        Screen::About => view_about(ctx.i18n),
    };

    let mut stack = Stack::new().push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            notifications::view(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    stack.into()
}

fn view_viewer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let zoom = ctx.viewer.zoom_state();

    let menu_view = menu::view(MenuViewContext {
        i18n: ctx.i18n,
        open_menu: ctx.open_menu,
        has_image: ctx.viewer.has_image(),
        fit_to_window: zoom.fit_to_window,
        can_zoom_in: zoom.can_zoom_in(),
        can_zoom_out: zoom.can_zoom_out(),
        active_variant: ctx.viewer.active_variant(),
    })
    .map(Message::Menu);

    let viewer_view = ctx
        .viewer
        .view(component::ViewEnv { i18n: ctx.i18n })
        .map(Message::Viewer);

    let mut column = Column::new()
        .push(menu_view)
        .push(
            Container::new(viewer_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.viewer.has_image() {
        column = column.push(status_bar(ctx));
    }

    column.into()
}

/// Thin status strip showing the current file and zoom level.
fn status_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let file_label = ctx
        .viewer
        .current_image_path
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let zoom_label = if ctx.viewer.zoom_state().fit_to_window {
        ctx.i18n.tr("status-fit-to-window")
    } else {
        ctx.viewer.zoom_state().percent_label()
    };

    Container::new(
        Row::new()
            .spacing(16)
            .push(Text::new(file_label).size(12).width(Length::Fill))
            .push(
                Container::new(Text::new(zoom_label).size(12)).align_x(Horizontal::Right),
            ),
    )
    .width(Length::Fill)
    .padding([2, 8])
    .into()
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
