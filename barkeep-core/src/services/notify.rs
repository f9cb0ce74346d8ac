//! Transient notifications
//!
//! Advisory only: nothing in the desk depends on a notification being seen.
//! The queue holds at most [`MAX_NOTIFICATIONS`] entries; pushing beyond that
//! evicts the oldest. Entries expire `duration_ms` after creation.

use serde::{Deserialize, Serialize};
use shared::util::now_millis;
use std::collections::VecDeque;

/// Maximum number of notifications shown at once
pub const MAX_NOTIFICATIONS: usize = 5;

/// Default notification lifetime
pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: i64,
    pub duration_ms: u64,
}

impl Notification {
    pub fn is_expired(&self, now: i64) -> bool {
        now - self.created_at >= self.duration_ms as i64
    }
}

#[derive(Debug)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    default_duration_ms: u64,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

impl NotificationQueue {
    pub fn new(default_duration_ms: u64) -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            default_duration_ms,
            next_id: 1,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, message)
    }

    /// Queue a notification with the default lifetime
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, self.default_duration_ms, now_millis())
    }

    /// Queue a notification created at `now` with an explicit lifetime
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration_ms: u64,
        now: i64,
    ) -> u64 {
        self.prune(now);
        while self.entries.len() >= MAX_NOTIFICATIONS {
            self.entries.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Notification {
            id,
            message: message.into(),
            kind,
            created_at: now,
            duration_ms,
        });
        id
    }

    /// Remove a notification before it expires
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Drop expired notifications
    pub fn prune(&mut self, now: i64) {
        self.entries.retain(|n| !n.is_expired(now));
    }

    /// Notifications still visible at `now`, oldest first
    pub fn visible(&self, now: i64) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| !n.is_expired(now))
    }

    /// Most recently queued notification, expired or not
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
