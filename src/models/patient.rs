use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Pathway;

/// One patient as shown on list cards and the detail header.
///
/// `id` is unique across a snapshot. `update_counter` only feeds the urgent
/// threshold and the ring fill on cards; it never drives clinical logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub qr_code: String,
    pub pathway: Pathway,
    /// Present point in the care journey, e.g. "pre-op" or "ICU".
    /// Free text by design: stage vocabularies differ per ward.
    pub current_state: String,
    pub diagnosis: String,
    pub comorbidities: Vec<String>,
    pub update_counter: u32,
    pub last_updated: DateTime<Utc>,
    pub assigned_doctor: Option<String>,
}

/// A recorded interval the patient spent in one stage.
///
/// `date_out` is absent while the patient is still in the stage; a snapshot
/// holds at most one such open entry per patient. Entries are stored in
/// `date_in` ascending order, which is the order classification walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub patient_id: String,
    pub state: String,
    pub date_in: DateTime<Utc>,
    pub date_out: Option<DateTime<Utc>>,
    /// Admission-task labels, insertion order.
    pub checklist_in: Vec<String>,
    /// Discharge-task labels; only rendered once `date_out` is set.
    pub checklist_out: Vec<String>,
}

impl TimelineEntry {
    /// True while the patient has not yet left this stage.
    pub fn is_open(&self) -> bool {
        self.date_out.is_none()
    }
}
