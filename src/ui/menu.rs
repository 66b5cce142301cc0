// SPDX-License-Identifier: MPL-2.0
//! Menu bar for app-level actions.
//!
//! Four dropdown menus (File, View, Watermark, Help) mirror the actions of
//! the viewer: open/save/print/quit, zoom and fit control, watermark
//! variant selection, and the about screen. At most one dropdown is open
//! at a time.

use crate::i18n::fluent::I18n;
use crate::media::watermark::WatermarkVariant;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// The dropdown menus of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    File,
    View,
    Watermark,
    Help,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle(MenuId),
    CloseMenu,
    OpenFile,
    SaveAs,
    Print,
    Quit,
    ZoomIn,
    ZoomOut,
    NormalSize,
    ToggleFitToWindow,
    SelectVariant(WatermarkVariant),
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFile,
    SaveAs,
    Print,
    Quit,
    ZoomIn,
    ZoomOut,
    NormalSize,
    ToggleFitToWindow,
    SelectVariant(WatermarkVariant),
    OpenAbout,
}

/// Process a menu message and return the corresponding event. Any action
/// closes the open dropdown.
pub fn update(message: Message, open_menu: &mut Option<MenuId>) -> Event {
    match message {
        Message::Toggle(id) => {
            *open_menu = if *open_menu == Some(id) { None } else { Some(id) };
            Event::None
        }
        Message::CloseMenu => {
            *open_menu = None;
            Event::None
        }
        Message::OpenFile => close_with(open_menu, Event::OpenFile),
        Message::SaveAs => close_with(open_menu, Event::SaveAs),
        Message::Print => close_with(open_menu, Event::Print),
        Message::Quit => close_with(open_menu, Event::Quit),
        Message::ZoomIn => close_with(open_menu, Event::ZoomIn),
        Message::ZoomOut => close_with(open_menu, Event::ZoomOut),
        Message::NormalSize => close_with(open_menu, Event::NormalSize),
        Message::ToggleFitToWindow => close_with(open_menu, Event::ToggleFitToWindow),
        Message::SelectVariant(variant) => close_with(open_menu, Event::SelectVariant(variant)),
        Message::OpenAbout => close_with(open_menu, Event::OpenAbout),
    }
}

fn close_with(open_menu: &mut Option<MenuId>, event: Event) -> Event {
    *open_menu = None;
    event
}

/// Contextual data needed to render the menu bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open_menu: Option<MenuId>,
    pub has_image: bool,
    pub fit_to_window: bool,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub active_variant: WatermarkVariant,
}

/// Render the menu bar with the open dropdown, if any.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let top_bar = Row::new()
        .spacing(4)
        .padding(4)
        .push(menu_button(ctx.i18n.tr("menu-file"), MenuId::File, ctx.open_menu))
        .push(menu_button(ctx.i18n.tr("menu-view"), MenuId::View, ctx.open_menu))
        .push(menu_button(
            ctx.i18n.tr("menu-watermark"),
            MenuId::Watermark,
            ctx.open_menu,
        ))
        .push(menu_button(ctx.i18n.tr("menu-help"), MenuId::Help, ctx.open_menu));

    let mut content = Column::new().width(Length::Fill).push(top_bar);

    if let Some(id) = ctx.open_menu {
        content = content.push(build_dropdown(&ctx, id));
    }

    content.into()
}

fn menu_button<'a>(label: String, id: MenuId, open: Option<MenuId>) -> Element<'a, Message> {
    let is_open = open == Some(id);
    button(Text::new(label))
        .padding([4, 10])
        .style(move |theme: &Theme, status| {
            let mut style = button::text(theme, status);
            if is_open {
                style.background = Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.25)));
            }
            style
        })
        .on_press(Message::Toggle(id))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>, id: MenuId) -> Element<'a, Message> {
    let entries: Vec<Element<'a, Message>> = match id {
        MenuId::File => vec![
            entry(ctx.i18n.tr("menu-open"), Some(Message::OpenFile)),
            entry(
                ctx.i18n.tr("menu-save-as"),
                ctx.has_image.then_some(Message::SaveAs),
            ),
            entry(
                ctx.i18n.tr("menu-print"),
                ctx.has_image.then_some(Message::Print),
            ),
            entry(ctx.i18n.tr("menu-quit"), Some(Message::Quit)),
        ],
        MenuId::View => vec![
            entry(
                ctx.i18n.tr("menu-zoom-in"),
                (ctx.has_image && ctx.can_zoom_in).then_some(Message::ZoomIn),
            ),
            entry(
                ctx.i18n.tr("menu-zoom-out"),
                (ctx.has_image && ctx.can_zoom_out).then_some(Message::ZoomOut),
            ),
            entry(
                ctx.i18n.tr("menu-normal-size"),
                (ctx.has_image && !ctx.fit_to_window).then_some(Message::NormalSize),
            ),
            entry(
                checked_label(ctx.i18n.tr("menu-fit-to-window"), ctx.fit_to_window),
                ctx.has_image.then_some(Message::ToggleFitToWindow),
            ),
        ],
        MenuId::Watermark => [WatermarkVariant::Light, WatermarkVariant::Dark]
            .into_iter()
            .map(|variant| {
                entry(
                    checked_label(ctx.i18n.tr(variant.i18n_key()), variant == ctx.active_variant),
                    (variant != ctx.active_variant).then_some(Message::SelectVariant(variant)),
                )
            })
            .collect(),
        MenuId::Help => vec![entry(ctx.i18n.tr("menu-about"), Some(Message::OpenAbout))],
    };

    let mut column = Column::new().width(Length::Fixed(220.0));
    for element in entries {
        column = column.push(element);
    }

    Container::new(column)
        .padding(4)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(Background::Color(palette.background.weak.color)),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn checked_label(label: String, checked: bool) -> String {
    if checked {
        format!("✓ {label}")
    } else {
        format!("  {label}")
    }
}

fn entry<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    let mut item = button(Text::new(label))
        .width(Length::Fill)
        .padding([4, 10])
        .style(button::text);
    if let Some(message) = message {
        item = item.on_press(message);
    }
    item.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes_the_same_menu() {
        let mut open = None;

        let _ = update(Message::Toggle(MenuId::File), &mut open);
        assert_eq!(open, Some(MenuId::File));

        let _ = update(Message::Toggle(MenuId::File), &mut open);
        assert_eq!(open, None);
    }

    #[test]
    fn toggle_switches_between_menus() {
        let mut open = Some(MenuId::File);

        let _ = update(Message::Toggle(MenuId::View), &mut open);

        assert_eq!(open, Some(MenuId::View));
    }

    #[test]
    fn actions_close_the_open_menu() {
        let mut open = Some(MenuId::File);

        let event = update(Message::OpenFile, &mut open);

        assert!(matches!(event, Event::OpenFile));
        assert_eq!(open, None);
    }

    #[test]
    fn variant_selection_propagates() {
        let mut open = Some(MenuId::Watermark);

        let event = update(
            Message::SelectVariant(WatermarkVariant::Dark),
            &mut open,
        );

        assert!(matches!(event, Event::SelectVariant(WatermarkVariant::Dark)));
    }
}
