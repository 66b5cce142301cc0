// SPDX-License-Identifier: MPL-2.0
//! Small state modules shared by the viewer component.

pub mod stamp;
pub mod viewport;
pub mod zoom;

pub use stamp::StampState;
pub use viewport::ViewportState;
pub use zoom::{ZoomFactor, ZoomState};
