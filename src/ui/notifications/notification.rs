// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => Color::from_rgb(0.13, 0.65, 0.37),
            Severity::Warning => Color::from_rgb(0.93, 0.62, 0.14),
            Severity::Error => Color::from_rgb(0.86, 0.22, 0.22),
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn success(message_key: &str) -> Self {
        Self::with_severity(Severity::Success, message_key)
    }

    #[must_use]
    pub fn warning(message_key: &str) -> Self {
        Self::with_severity(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn error(message_key: &str) -> Self {
        Self::with_severity(Severity::Error, message_key)
    }

    fn with_severity(severity: Severity, message_key: &str) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.to_string(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Attaches a message argument, e.g. the failing filename.
    #[must_use]
    pub fn with_arg(mut self, name: &str, value: impl Into<String>) -> Self {
        self.message_args.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether this notification has outlived its display duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => self.created_at.elapsed() >= duration,
            None => false,
        }
    }
}
