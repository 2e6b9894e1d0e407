//! Snapshot provider — the data seam between the core and whatever
//! supplies records.
//!
//! The core never reads process-wide mutable state: every derivation takes
//! an immutable `DataSnapshot` delivered by a `SnapshotProvider`. When a
//! real backend lands, its fetch layer implements the trait and each
//! completed fetch hands the screens a fresh snapshot to re-derive from.
//! Until then `MockProvider` serves the one canonical fixture (the
//! per-screen mock arrays of the prototype, consolidated).

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    ContactInfo, Notification, NotificationType, Pathway, PatientRecord, StaffProfile, StaffRole,
    Task, TaskPriority, TaskStatus, TaskType, TimelineEntry,
};

/// One immutable snapshot of everything the dashboard screens derive from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub patients: Vec<PatientRecord>,
    /// All patients' journey entries, `date_in` ascending per patient.
    pub timelines: Vec<TimelineEntry>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub staff: Vec<StaffProfile>,
}

/// Journey entries for one patient, in stored order. An unknown id yields
/// an empty sequence; callers render their "no timeline" placeholder.
pub fn timeline_for(snapshot: &DataSnapshot, patient_id: &str) -> Vec<TimelineEntry> {
    snapshot
        .timelines
        .iter()
        .filter(|e| e.patient_id == patient_id)
        .cloned()
        .collect()
}

/// Supplies record snapshots to the screens. One per data source,
/// independently testable.
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(&self) -> DataSnapshot;
}

/// In-memory fixture provider used until a backend exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProvider;

impl SnapshotProvider for MockProvider {
    fn snapshot(&self) -> DataSnapshot {
        mock_snapshot()
    }
}

fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    // July 2025, the fixture's reference week.
    Utc.with_ymd_and_hms(2025, 7, day, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// The canonical mock dataset. Single source of truth: ids line up across
/// patients, timelines, and tasks.
pub fn mock_snapshot() -> DataSnapshot {
    DataSnapshot {
        patients: mock_patients(),
        timelines: mock_timelines(),
        tasks: mock_tasks(),
        notifications: mock_notifications(),
        staff: mock_staff(),
    }
}

fn mock_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: "27e8d1ad".into(),
            name: "Jane Doe".into(),
            qr_code: "https://qrc.c/27e8d1ad".into(),
            pathway: Pathway::Surgical,
            current_state: "post-op".into(),
            diagnosis: "Cholecystitis".into(),
            comorbidities: vec!["HTN".into(), "DM".into()],
            update_counter: 5,
            last_updated: ts(19, 14, 30),
            assigned_doctor: Some("doctor1".into()),
        },
        PatientRecord {
            id: "3b9f2c1e".into(),
            name: "John Smith".into(),
            qr_code: "https://qrc.c/3b9f2c1e".into(),
            pathway: Pathway::Emergency,
            current_state: "ICU".into(),
            diagnosis: "Sepsis".into(),
            comorbidities: vec!["CKD".into()],
            update_counter: 9,
            last_updated: ts(19, 16, 45),
            assigned_doctor: Some("doctor1".into()),
        },
        PatientRecord {
            id: "8c4d5e2f".into(),
            name: "Maria Garcia".into(),
            qr_code: "https://qrc.c/8c4d5e2f".into(),
            pathway: Pathway::Consultation,
            current_state: "stable".into(),
            diagnosis: "Migraine".into(),
            comorbidities: vec![],
            update_counter: 2,
            last_updated: ts(19, 9, 15),
            assigned_doctor: Some("doctor2".into()),
        },
    ]
}

fn mock_timelines() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            patient_id: "27e8d1ad".into(),
            state: "Admission".into(),
            date_in: ts(18, 8, 0),
            date_out: Some(ts(18, 10, 0)),
            checklist_in: vec!["vitals-recorded".into(), "allergies-checked".into()],
            checklist_out: vec!["pre-op-clearance".into()],
        },
        TimelineEntry {
            patient_id: "27e8d1ad".into(),
            state: "Pre-Op".into(),
            date_in: ts(18, 10, 0),
            date_out: Some(ts(18, 14, 0)),
            checklist_in: vec!["consent-signed".into(), "fasting-confirmed".into()],
            checklist_out: vec!["anesthesia-cleared".into()],
        },
        TimelineEntry {
            patient_id: "27e8d1ad".into(),
            state: "Surgery".into(),
            date_in: ts(18, 14, 0),
            date_out: Some(ts(18, 16, 30)),
            checklist_in: vec!["timeout-completed".into(), "antibiotics-given".into()],
            checklist_out: vec!["procedure-completed".into(), "counts-correct".into()],
        },
        TimelineEntry {
            patient_id: "27e8d1ad".into(),
            state: "Post-Op".into(),
            date_in: ts(18, 16, 30),
            date_out: None,
            checklist_in: vec!["recovery-stable".into(), "pain-managed".into()],
            checklist_out: vec![],
        },
    ]
}

fn mock_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task1".into(),
            patient_id: "27e8d1ad".into(),
            title: "Review CBC results".into(),
            task_type: TaskType::Lab,
            due: ts(19, 15, 0),
            assignee_id: "doctor1".into(),
            status: TaskStatus::Open,
            priority: TaskPriority::High,
            recurring: false,
        },
        Task {
            id: "task2".into(),
            patient_id: "3b9f2c1e".into(),
            title: "Administer medication".into(),
            task_type: TaskType::Medication,
            due: ts(19, 16, 30),
            assignee_id: "nurse1".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Urgent,
            recurring: true,
        },
        Task {
            id: "task3".into(),
            patient_id: "8c4d5e2f".into(),
            title: "Pre-op assessment".into(),
            task_type: TaskType::Assessment,
            due: ts(20, 9, 0),
            assignee_id: "doctor2".into(),
            status: TaskStatus::Open,
            priority: TaskPriority::Medium,
            recurring: false,
        },
    ]
}

fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationType::Urgent,
            title: "Urgent: Patient Status Change".into(),
            message: "Patient moved to ICU - requires immediate attention".into(),
            timestamp: ts(19, 16, 45),
            patient_name: Some("John Smith".into()),
            read: false,
        },
        Notification {
            id: "2".into(),
            kind: NotificationType::Update,
            title: "Lab Results Available".into(),
            message: "New lab results have been uploaded for review".into(),
            timestamp: ts(19, 15, 30),
            patient_name: Some("Jane Doe".into()),
            read: false,
        },
        Notification {
            id: "3".into(),
            kind: NotificationType::Assignment,
            title: "New Patient Assignment".into(),
            message: "You have been assigned a new patient".into(),
            timestamp: ts(19, 14, 15),
            patient_name: Some("Maria Garcia".into()),
            read: true,
        },
        Notification {
            id: "4".into(),
            kind: NotificationType::Report,
            title: "Daily Report Generated".into(),
            message: "Your daily patient summary report is ready".into(),
            timestamp: ts(19, 12, 0),
            patient_name: None,
            read: true,
        },
    ]
}

fn mock_staff() -> Vec<StaffProfile> {
    vec![StaffProfile {
        id: "doctor1".into(),
        name: "Dr. Sarah Wilson".into(),
        role: StaffRole::Doctor,
        department: "Surgery".into(),
        contact: ContactInfo {
            phone: Some("+1-555-0789".into()),
            email: Some("sarah.wilson@hospital.com".into()),
        },
        shift: "Day Shift (7AM - 7PM)".into(),
        permissions: vec!["prescribe".into(), "approve".into(), "admin".into()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_patient_ids_are_unique() {
        let snapshot = MockProvider.snapshot();
        let mut ids: Vec<_> = snapshot.patients.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), snapshot.patients.len());
    }

    #[test]
    fn mock_references_resolve() {
        let snapshot = mock_snapshot();
        let patient_ids: Vec<_> = snapshot.patients.iter().map(|p| p.id.as_str()).collect();

        for entry in &snapshot.timelines {
            assert!(patient_ids.contains(&entry.patient_id.as_str()));
        }
        for task in &snapshot.tasks {
            assert!(patient_ids.contains(&task.patient_id.as_str()));
        }
    }

    #[test]
    fn at_most_one_open_timeline_entry_per_patient() {
        let snapshot = mock_snapshot();
        for patient in &snapshot.patients {
            let open = timeline_for(&snapshot, &patient.id)
                .iter()
                .filter(|e| e.is_open())
                .count();
            assert!(open <= 1, "patient {} has {open} open entries", patient.id);
        }
    }

    #[test]
    fn timeline_for_unknown_patient_is_empty() {
        let snapshot = mock_snapshot();
        assert!(timeline_for(&snapshot, "missing").is_empty());
    }

    #[test]
    fn timeline_for_is_date_in_ascending() {
        let snapshot = mock_snapshot();
        let entries = timeline_for(&snapshot, "27e8d1ad");
        assert_eq!(entries.len(), 4);
        for pair in entries.windows(2) {
            assert!(pair[0].date_in <= pair[1].date_in);
        }
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = mock_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DataSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.patients, snapshot.patients);
        assert_eq!(back.tasks, snapshot.tasks);
    }
}
