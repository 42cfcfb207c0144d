use chrono::{DateTime, Local};
use crossterm::style::Color;
use std::time::Duration;

use crate::common::config::AppConfig;

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Local>,
    pub duration_seconds: u64,
    pub notification_type: NotificationType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Warning,
    Celebration,
}

impl NotificationType {
    pub fn color(self) -> Color {
        match self {
            NotificationType::Info => Color::Cyan,
            NotificationType::Warning => Color::Yellow,
            NotificationType::Celebration => Color::Magenta,
        }
    }
}

impl Notification {
    pub fn new(message: String, notification_type: NotificationType) -> Self {
        Self {
            message,
            created_at: Local::now(),
            duration_seconds: AppConfig::NOTIFICATION_DURATION_SECS,
            notification_type,
        }
    }

    pub fn is_expired(&self) -> bool {
        let elapsed = Local::now()
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0));

        elapsed >= Duration::from_secs(self.duration_seconds)
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationManager {
    pub current_notification: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            current_notification: None,
        }
    }

    pub fn show(&mut self, message: String, notification_type: NotificationType) {
        self.current_notification = Some(Notification::new(message, notification_type));
    }

    pub fn clear(&mut self) {
        self.current_notification = None;
    }

    /// Drop the current notification once it has expired. Returns true when
    /// something was removed so the caller knows to redraw.
    pub fn update(&mut self) -> bool {
        if self
            .current_notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.current_notification = None;
            return true;
        }
        false
    }

    pub fn get_current_notification(&self) -> Option<&Notification> {
        self.current_notification.as_ref()
    }
}

// Helper functions for common notification types
impl NotificationManager {
    pub fn info(&mut self, message: String) {
        self.show(message, NotificationType::Info);
    }

    pub fn warning(&mut self, message: String) {
        self.show(message, NotificationType::Warning);
    }

    pub fn celebrate(&mut self, message: String) {
        self.show(message, NotificationType::Celebration);
    }
}
