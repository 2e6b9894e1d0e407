//! Patient intake — validation of the add-patient form and admission of a
//! new record.
//!
//! Field checks mirror the form's schema: short names, missing required
//! fields, and out-of-range ages are all collected into one `Validation`
//! error so the form can surface every problem at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{Gender, Pathway, PatientRecord};

/// Stage assigned to every freshly admitted patient.
pub const ADMISSION_STAGE: &str = "admission";

/// Raw add-patient form values. Text fields arrive as typed; the selects
/// are `None` until the user picks a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub mrn: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub pathway: Option<Pathway>,
    pub diagnosis: String,
    pub assigned_doctor: String,
    pub room: Option<String>,
    /// Comma-separated labels, split on admission.
    pub comorbidities: String,
    pub allergies: String,
    pub emergency_contact: Option<String>,
}

impl NewPatient {
    /// Check every field, collecting all failures rather than stopping at
    /// the first.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < 2 {
            errors.push("Name must be at least 2 characters".to_string());
        }
        if self.mrn.trim().is_empty() {
            errors.push("MRN is required".to_string());
        }
        match self.age.trim() {
            "" => errors.push("Age is required".to_string()),
            age => {
                if !matches!(age.parse::<u32>(), Ok(0..=130)) {
                    errors.push("Age must be a whole number between 0 and 130".to_string());
                }
            }
        }
        if self.gender.is_none() {
            errors.push("Gender is required".to_string());
        }
        if self.pathway.is_none() {
            errors.push("Pathway is required".to_string());
        }
        if self.diagnosis.trim().is_empty() {
            errors.push("Diagnosis is required".to_string());
        }
        if self.assigned_doctor.trim().is_empty() {
            errors.push("Assigned doctor is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

/// Validate and admit a new patient, producing the record the snapshot
/// layer will carry. Ids are fresh v4 uuids; the update ring starts empty.
pub fn admit(new: &NewPatient, now: DateTime<Utc>) -> Result<PatientRecord, CoreError> {
    new.validate()?;
    let pathway = new
        .pathway
        .ok_or_else(|| CoreError::Validation(vec!["Pathway is required".to_string()]))?;

    let id = Uuid::new_v4().to_string();
    let record = PatientRecord {
        qr_code: format!("https://qrc.c/{id}"),
        id,
        name: new.name.trim().to_string(),
        pathway,
        current_state: ADMISSION_STAGE.to_string(),
        diagnosis: new.diagnosis.trim().to_string(),
        comorbidities: split_labels(&new.comorbidities),
        update_counter: 0,
        last_updated: now,
        assigned_doctor: Some(new.assigned_doctor.trim().to_string()),
    };

    tracing::info!(patient_id = %record.id, pathway = record.pathway.as_str(), "Patient admitted");
    Ok(record)
}

fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
