use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::NotificationType;

/// One entry in the notifications popup. `read` is the only mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub patient_name: Option<String>,
    pub read: bool,
}
