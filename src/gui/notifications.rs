//! Toast notifications
//!
//! Toasts stack in arrival order and dismiss themselves after a fixed time-to-live,
//! or earlier when the user clicks them away. Nothing is kept once a toast is gone.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// ASCII tag shown in front of the message
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Success => "[OK]",
            Severity::Warning => "[!]",
            Severity::Error => "[XX]",
        }
    }
}

/// A notification entry with message and creation time
#[derive(Clone, Debug)]
pub struct NotificationEntry {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
}

impl NotificationEntry {
    /// Fraction of the time-to-live already elapsed, in `0.0..=1.0`
    pub fn progress(&self, now: Instant, ttl: Duration) -> f32 {
        if ttl.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        (elapsed.as_secs_f32() / ttl.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug)]
pub struct Notifications {
    entries: VecDeque<NotificationEntry>,
    next_id: u64,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 0,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.push_at(severity, message, Instant::now())
    }

    pub(crate) fn push_at(&mut self, severity: Severity, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(NotificationEntry {
            id,
            severity,
            message: message.into(),
            created_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Success, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Error, message)
    }

    /// Drop every toast whose time-to-live has elapsed
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|entry| now.saturating_duration_since(entry.created_at) < ttl);
    }

    /// Dismiss a single toast; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&NotificationEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
