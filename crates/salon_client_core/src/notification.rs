//! Transient banners. Each one is dismissed by its close button or after the TTL,
//! whichever comes first.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const AUTO_DISMISS_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// `notification notification-<kind>`
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(AUTO_DISMISS_MS)
    }
}

impl NotificationCenter {
    /// TTLs beyond what a `Duration` can hold are clamped to the maximum.
    pub fn new(ttl_ms: u64) -> Self {
        let ttl = i64::try_from(ttl_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        Self { items: Vec::new(), ttl }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl.num_milliseconds().max(0) as u64
    }

    /// Adds a banner on top of any already showing and returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at: now,
        };
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Removes the banner if it is still present.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drops every banner whose TTL has elapsed at `now`; returns how many were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.items.len();
        self.items.retain(|n| now - n.created_at < ttl);
        before - self.items.len()
    }

    pub fn is_present(&self, id: Uuid) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }
}
