// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! User-facing notifications (toast messages)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// One message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub at: DateTime<Utc>,
}

impl Notification {
    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            at: Utc::now(),
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::error!(message = %notification.message, "Notification"),
            Severity::Warning => tracing::warn!(message = %notification.message, "Notification"),
            Severity::Info | Severity::Success => {
                tracing::info!(message = %notification.message, "Notification")
            }
        }
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().clone()
    }

    /// Messages of all notifications so far
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .read()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.read().is_empty()
    }

    pub fn clear(&self) {
        self.notifications.write().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.write().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        let shared = notifier.clone();
        shared.notify(Notification::error("bad input"));

        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.messages(), vec!["bad input".to_string()]);
        assert_eq!(notifier.notifications()[0].severity, Severity::Error);

        notifier.clear();
        assert!(notifier.is_empty());
    }
}
