//! Notification feed
//!
//! Short user-facing messages raised by successful commands, shown newest
//! first on the dashboard.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used for notifications ("2024-09-29 10:30")
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: String,
}

impl Notification {
    pub fn new(
        id: u64,
        kind: NotificationKind,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            timestamp: timestamp.into(),
        }
    }
}

/// Append-only list of notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed holding existing notifications; they are assumed to be in
    /// chronological order, newest first
    pub fn with_notifications(newest_first: Vec<Notification>) -> Self {
        let next_id = newest_first.iter().map(|n| n.id).max().unwrap_or(0);
        let mut items = newest_first;
        items.reverse();
        Self { items, next_id }
    }

    /// Append a notification stamped at `at`
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        at: DateTime<Utc>,
    ) -> &Notification {
        self.next_id += 1;
        let notification = Notification::new(
            self.next_id,
            kind,
            message,
            at.format(TIMESTAMP_FORMAT).to_string(),
        );
        self.items.push(notification);
        &self.items[self.items.len() - 1]
    }

    pub fn success(&mut self, message: impl Into<String>, at: DateTime<Utc>) -> &Notification {
        self.push(NotificationKind::Success, message, at)
    }

    /// Up to `limit` notifications, newest first
    pub fn recent(&self, limit: usize) -> Vec<Notification> {
        self.items.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
