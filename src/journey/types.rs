use serde::{Deserialize, Serialize};

use crate::models::TimelineEntry;

/// Where one journey entry sits relative to the patient's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

/// A timeline entry paired with its derived status and elapsed-duration
/// label, ready for the journey view to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    pub entry: TimelineEntry,
    pub status: StageStatus,
    /// Whole hours under 24h, whole days after, e.g. "7h" or "3d".
    pub duration_label: String,
}
