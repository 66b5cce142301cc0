// SPDX-License-Identifier: MPL-2.0
//! `iced_mark` is an image viewer with watermark stamping built with the
//! Iced GUI framework.
//!
//! It displays a raster image in a zoomable, scrollable viewport and lets
//! the user preview, scale, and permanently stamp a watermark onto the
//! image with mouse gestures, then export or print the result. The crate
//! also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_mark/0.2.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
