use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{TaskPriority, TaskStatus, TaskType};

/// A unit of ward work tracked on the kanban board.
///
/// `status` is the only field the core ever changes; everything else is
/// fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    pub task_type: TaskType,
    pub due: DateTime<Utc>,
    pub assignee_id: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub recurring: bool,
}
