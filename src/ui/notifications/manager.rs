// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.

use super::{Notification, NotificationId, NotificationMessage};

/// Owns the active notifications and handles dismissal.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification to the stack.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Removes a notification by ID.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id() != id);
    }

    /// Drops notifications that outlived their display duration. Driven by
    /// the app's tick subscription.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Handles a message emitted by the notification UI.
    pub fn handle_message(&mut self, message: NotificationMessage) {
        match message {
            NotificationMessage::Dismiss(id) => self.dismiss(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error("key");
        let id = notification.id();

        manager.push(notification);
        assert!(manager.has_notifications());

        manager.dismiss(id);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_unknown_id_is_harmless() {
        let mut manager = Manager::new();
        manager.push(Notification::error("key"));

        manager.dismiss(NotificationId::new());

        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn tick_keeps_unexpired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("key"));
        manager.push(Notification::success("other-key"));

        manager.tick();

        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let notification = Notification::warning("key");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(NotificationMessage::Dismiss(id));

        assert!(manager.is_empty());
    }
}
