//! Staff profile — view model behind the profile page.
//!
//! Activity stats, notification preference toggles, and the avatar
//! initials fallback. Derived stats come from the snapshot so the page
//! agrees with the board and dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TaskStatus;
use crate::snapshot::DataSnapshot;

/// The "Today's Activity" tile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub patients_today: u32,
    pub tasks_completed: u32,
    pub hours_worked: f32,
}

impl ActivityStats {
    /// Patients and completed tasks assigned to one staff member, plus
    /// hours elapsed since their shift started.
    pub fn derive(
        snapshot: &DataSnapshot,
        staff_id: &str,
        shift_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let patients_today = snapshot
            .patients
            .iter()
            .filter(|p| p.assigned_doctor.as_deref() == Some(staff_id))
            .count() as u32;

        let tasks_completed = snapshot
            .tasks
            .iter()
            .filter(|t| t.assignee_id == staff_id && t.status == TaskStatus::Done)
            .count() as u32;

        let hours_worked = ((now - shift_start).num_minutes().max(0) as f32 / 60.0 * 10.0)
            .floor()
            / 10.0;

        Self { patients_today, tasks_completed, hours_worked }
    }
}

/// Per-user notification toggles. Defaults mirror the profile page's
/// initial switch states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub urgent_alerts: bool,
    pub task_reminders: bool,
    pub lab_results: bool,
    pub shift_updates: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            urgent_alerts: true,
            task_reminders: true,
            lab_results: false,
            shift_updates: true,
        }
    }
}

/// Avatar fallback: first letter of each name part, e.g. "Dr. Sarah
/// Wilson" -> "DSW".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
