//! Notifications — read-state holder behind the bell popup.
//!
//! Holds the notification sequence in insertion order (read state never
//! reorders it) and applies the mark-read intents. Relative timestamp
//! labels use the same floor-division convention as the journey and board
//! badges, bucketed at minute/hour/day granularity.

use chrono::{DateTime, Utc};

use crate::models::Notification;

/// Owns the notification list for one session. Mutations touch only the
/// `read` flag; the collection itself is replaced wholesale on refetch.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Current sequence, insertion order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Mark one notification read. Absent ids and already-read entries are
    /// a silent no-op; the popup never errors.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            if !n.read {
                n.read = true;
                tracing::debug!(notification_id = %id, "Notification marked read");
            }
        }
    }

    /// The "Mark all read" button. Idempotent.
    pub fn mark_all_read(&mut self) {
        let newly_read = self.notifications.iter().filter(|n| !n.read).count();
        for n in &mut self.notifications {
            n.read = true;
        }
        if newly_read > 0 {
            tracing::debug!(newly_read, "All notifications marked read");
        }
    }

    /// Badge count on the bell icon.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// "5m ago" / "3h ago" / "2d ago" label for a notification row.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}
