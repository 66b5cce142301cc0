// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-blocking user feedback.

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view;

/// Messages emitted by the notification UI.
#[derive(Debug, Clone)]
pub enum NotificationMessage {
    Dismiss(NotificationId),
}
