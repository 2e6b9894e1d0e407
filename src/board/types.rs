use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus};

/// The fixed kanban columns, in board order. Cancelled tasks have no
/// column and are excluded from the board entirely.
pub const KANBAN_COLUMNS: [(TaskStatus, &str); 3] = [
    (TaskStatus::Open, "To Do"),
    (TaskStatus::InProgress, "In Progress"),
    (TaskStatus::Done, "Done"),
];

/// One rendered board column: its status bucket, display title, and the
/// tasks currently in it (input order preserved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub title: String,
    pub tasks: Vec<Task>,
}
