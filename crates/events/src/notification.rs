//! Transient toast notifications.
//!
//! [`NotificationCenter`] models the fixed-position toast container. Toasts
//! expire a configurable duration after posting; the center never sleeps on
//! its own — callers drive expiry by passing the current time to
//! [`purge_expired`](NotificationCenter::purge_expired).

use std::collections::VecDeque;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mentorconnect_core::types::Timestamp;

/// Default display duration for a toast, in milliseconds.
pub const DEFAULT_DURATION_MS: i64 = 3000;

/// Shortened duration used for search feedback toasts.
pub const SEARCH_FEEDBACK_DURATION_MS: i64 = 1500;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A single toast notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Timestamp,
    /// Display duration in milliseconds.
    pub duration_ms: i64,
}

impl Notification {
    /// Whether the toast is still on screen at `now`.
    pub fn is_active(&self, now: Timestamp) -> bool {
        now < self.created_at + Duration::milliseconds(self.duration_ms)
    }
}

/// The fixed-position container holding the currently displayed toasts.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: VecDeque<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a toast with the default duration. Returns its id.
    pub fn post(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        now: Timestamp,
    ) -> Uuid {
        self.post_with_duration(level, message, DEFAULT_DURATION_MS, now)
    }

    /// Post a toast with an explicit display duration.
    pub fn post_with_duration(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        duration_ms: i64,
        now: Timestamp,
    ) -> Uuid {
        let toast = Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: now,
            duration_ms,
        };
        let id = toast.id;
        tracing::debug!(%id, level = ?level, message = %toast.message, "Toast posted");
        self.toasts.push_back(toast);
        id
    }

    /// Drop every toast whose display window has elapsed.
    pub fn purge_expired(&mut self, now: Timestamp) {
        self.toasts.retain(|toast| toast.is_active(now));
    }

    /// Currently displayed toasts, oldest first.
    pub fn active(&self, now: Timestamp) -> Vec<&Notification> {
        self.toasts.iter().filter(|toast| toast.is_active(now)).collect()
    }

    /// Dismiss everything at once (the Escape-key behavior).
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Number of toasts held, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).single().expect("valid timestamp")
    }

    #[test]
    fn posted_toast_is_active_within_its_duration() {
        let mut center = NotificationCenter::new();
        center.post(NotificationLevel::Success, "Request accepted successfully!", t0());

        assert_eq!(center.active(t0()).len(), 1);
        assert_eq!(center.active(t0() + Duration::milliseconds(2999)).len(), 1);
    }

    #[test]
    fn toast_expires_after_its_duration() {
        let mut center = NotificationCenter::new();
        center.post(NotificationLevel::Info, "Request rejected", t0());

        assert!(center.active(t0() + Duration::milliseconds(3000)).is_empty());
    }

    #[test]
    fn explicit_duration_overrides_the_default() {
        let mut center = NotificationCenter::new();
        center.post_with_duration(
            NotificationLevel::Info,
            "Searching for: priya",
            SEARCH_FEEDBACK_DURATION_MS,
            t0(),
        );

        assert_eq!(center.active(t0() + Duration::milliseconds(1499)).len(), 1);
        assert!(center.active(t0() + Duration::milliseconds(1500)).is_empty());
    }

    #[test]
    fn purge_drops_only_expired_toasts() {
        let mut center = NotificationCenter::new();
        center.post_with_duration(NotificationLevel::Info, "short", 1000, t0());
        center.post(NotificationLevel::Error, "long", t0());

        center.purge_expired(t0() + Duration::milliseconds(2000));
        assert_eq!(center.len(), 1);
        let now = t0() + Duration::milliseconds(2000);
        assert_eq!(center.active(now)[0].message, "long");
    }

    #[test]
    fn dismiss_all_empties_the_center() {
        let mut center = NotificationCenter::new();
        center.post(NotificationLevel::Info, "one", t0());
        center.post(NotificationLevel::Info, "two", t0());

        center.dismiss_all();
        assert!(center.is_empty());
    }

    #[test]
    fn toasts_keep_posting_order() {
        let mut center = NotificationCenter::new();
        center.post(NotificationLevel::Info, "first", t0());
        center.post(NotificationLevel::Info, "second", t0());

        let active = center.active(t0());
        assert_eq!(active[0].message, "first");
        assert_eq!(active[1].message, "second");
    }

    #[test]
    fn ids_are_unique() {
        let mut center = NotificationCenter::new();
        let a = center.post(NotificationLevel::Info, "a", t0());
        let b = center.post(NotificationLevel::Info, "b", t0());
        assert_ne!(a, b);
    }
}
