// SPDX-License-Identifier: MPL-2.0
//! Image viewer module responsible for rendering the canvas and handling
//! viewer interaction.

pub mod component;
pub mod pane;
pub mod state;

use self::component::Message;
use crate::media::ImageData;
use iced::widget::Image;
use iced::{Element, Length};

/// Renders the display buffer at the given zoom factor.
pub fn view_image(image_data: &ImageData, factor: f32) -> Element<'_, Message> {
    let scale = factor.max(0.01);
    let width = (image_data.width as f32 * scale).max(1.0);
    let height = (image_data.height as f32 * scale).max(1.0);

    Image::new(image_data.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}
