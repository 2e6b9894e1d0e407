use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::models::{Task, TaskStatus};

use super::types::{BoardColumn, KANBAN_COLUMNS};

/// Group tasks into the fixed board columns. Every column is present even
/// when empty; cancelled tasks land in no column.
pub fn partition(tasks: &[Task]) -> Vec<BoardColumn> {
    KANBAN_COLUMNS
        .iter()
        .map(|&(status, title)| BoardColumn {
            status,
            title: title.to_string(),
            tasks: tasks.iter().filter(|t| t.status == status).cloned().collect(),
        })
        .collect()
}

/// The single-action status chain: Start moves an open task to
/// in-progress, Complete moves in-progress to done. Done and cancelled
/// have no outgoing transition.
pub fn next_status(status: TaskStatus) -> Option<TaskStatus> {
    match status {
        TaskStatus::Open => Some(TaskStatus::InProgress),
        TaskStatus::InProgress => Some(TaskStatus::Done),
        TaskStatus::Done | TaskStatus::Cancelled => None,
    }
}

/// Move a task along the status chain, returning the updated copy.
/// Any transition outside `open -> in-progress -> done` is rejected and
/// the input stays untouched.
pub fn advance(task: &Task, target: TaskStatus) -> Result<Task, CoreError> {
    if next_status(task.status) != Some(target) {
        tracing::warn!(
            task_id = %task.id,
            from = task.status.as_str(),
            to = target.as_str(),
            "Rejected task status transition"
        );
        return Err(CoreError::InvalidTransition {
            from: task.status.as_str().into(),
            to: target.as_str().into(),
        });
    }

    tracing::debug!(task_id = %task.id, to = target.as_str(), "Task advanced");
    Ok(Task { status: target, ..task.clone() })
}

/// The board's `onStatusChange` intent: returns a new task collection with
/// one task advanced. Unknown ids are `NotFound`; an invalid transition
/// leaves the caller's collection unchanged (the error carries the detail).
pub fn apply_status_change(
    tasks: &[Task],
    task_id: &str,
    target: TaskStatus,
) -> Result<Vec<Task>, CoreError> {
    let task = tasks
        .iter()
        .find(|t| t.id == task_id)
        .ok_or_else(|| CoreError::not_found("task", task_id))?;
    let updated = advance(task, target)?;

    Ok(tasks
        .iter()
        .map(|t| if t.id == task_id { updated.clone() } else { t.clone() })
        .collect())
}

/// The All Tasks / My Tasks toggle: `None` keeps everything, otherwise
/// only tasks assigned to the given staff id remain.
pub fn filter_by_assignee(tasks: &[Task], assignee: Option<&str>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| assignee.map_or(true, |a| t.assignee_id == a))
        .cloned()
        .collect()
}

/// Due-time badge for a task card. Past due is "Overdue", under an hour
/// away is "Due now", then whole hours under 24h and whole days after.
pub fn due_label(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now > due {
        return "Overdue".to_string();
    }

    let hours = (due - now).num_hours();
    if hours < 1 {
        "Due now".to_string()
    } else if hours < 24 {
        format!("{hours}h")
    } else {
        format!("{}d", hours / 24)
    }
}
