//! Patients list — filter engine and lookups.
//!
//! Stable filtering over an immutable snapshot of patient records: the
//! output preserves input order, never sorts, and is recomputed per
//! interaction. The filter spec itself lives in `models::filters`.

use crate::models::{PatientFilter, PatientRecord};

/// A patient counts as "urgent" once its update counter exceeds this.
/// Fixed threshold, not configurable.
pub const URGENT_UPDATE_THRESHOLD: u32 = 5;

/// Apply a filter spec to a patient snapshot. A patient matches only when
/// every dimension matches (logical AND); empty search matches everyone.
pub fn filter_patients(patients: &[PatientRecord], filter: &PatientFilter) -> Vec<PatientRecord> {
    let matched: Vec<PatientRecord> = patients
        .iter()
        .filter(|p| matches_filter(p, filter))
        .cloned()
        .collect();

    tracing::debug!(
        total = patients.len(),
        matched = matched.len(),
        active_dimensions = filter.active_count(),
        "Filtered patient list"
    );
    matched
}

fn matches_filter(patient: &PatientRecord, filter: &PatientFilter) -> bool {
    let needle = filter.search.to_lowercase();
    let matches_search = needle.is_empty()
        || patient.name.to_lowercase().contains(&needle)
        || patient.diagnosis.to_lowercase().contains(&needle);

    let matches_pathway = filter.pathway.map_or(true, |p| patient.pathway == p);

    // Exact, case-sensitive stage comparison; an unknown stage value
    // simply matches no patient.
    let matches_stage = filter
        .stage
        .as_deref()
        .map_or(true, |stage| patient.current_state == stage);

    let matches_urgent =
        !filter.urgent_only || patient.update_counter > URGENT_UPDATE_THRESHOLD;

    let matches_assignee = filter
        .assignee
        .as_deref()
        .map_or(true, |a| patient.assigned_doctor.as_deref() == Some(a));

    matches_search && matches_pathway && matches_stage && matches_urgent && matches_assignee
}

/// Lookup for the detail screen. An absent id yields `None`, never an
/// error; the caller renders its own empty state.
pub fn find_patient<'a>(patients: &'a [PatientRecord], id: &str) -> Option<&'a PatientRecord> {
    patients.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pathway;
    use chrono::{TimeZone, Utc};

    fn patient(id: &str, name: &str, pathway: Pathway, state: &str, diagnosis: &str) -> PatientRecord {
        PatientRecord {
            id: id.into(),
            name: name.into(),
            qr_code: format!("https://qrc.c/{id}"),
            pathway,
            current_state: state.into(),
            diagnosis: diagnosis.into(),
            comorbidities: vec![],
            update_counter: 0,
            last_updated: Utc.with_ymd_and_hms(2025, 7, 19, 14, 30, 0).unwrap(),
            assigned_doctor: None,
        }
    }

    fn ward() -> Vec<PatientRecord> {
        vec![
            patient("p1", "Jane Doe", Pathway::Surgical, "post-op", "Cholecystitis"),
            patient("p2", "John Smith", Pathway::Emergency, "ICU", "Sepsis"),
            patient("p3", "Maria Garcia", Pathway::Consultation, "stable", "Migraine"),
        ]
    }

    #[test]
    fn default_filter_returns_all_in_order() {
        let patients = ward();
        let out = filter_patients(&patients, &PatientFilter::default());
        assert_eq!(out, patients);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_diagnosis() {
        let patients = ward();

        let by_name = filter_patients(
            &patients,
            &PatientFilter { search: "JANE".into(), ..Default::default() },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "p1");

        let by_diagnosis = filter_patients(
            &patients,
            &PatientFilter { search: "sepsis".into(), ..Default::default() },
        );
        assert_eq!(by_diagnosis.len(), 1);
        assert_eq!(by_diagnosis[0].id, "p2");
    }

    #[test]
    fn pathway_dimension_narrows() {
        let patients = ward();
        let out = filter_patients(
            &patients,
            &PatientFilter { pathway: Some(Pathway::Emergency), ..Default::default() },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p2");
    }

    #[test]
    fn stage_match_is_case_sensitive() {
        let patients = ward();

        let exact = filter_patients(
            &patients,
            &PatientFilter { stage: Some("ICU".into()), ..Default::default() },
        );
        assert_eq!(exact.len(), 1);

        // Lower-cased stage names only match where stored that way.
        let lowered = filter_patients(
            &patients,
            &PatientFilter { stage: Some("icu".into()), ..Default::default() },
        );
        assert!(lowered.is_empty());
    }

    #[test]
    fn unknown_stage_matches_nothing() {
        let patients = ward();
        let out = filter_patients(
            &patients,
            &PatientFilter { stage: Some("hyperbaric".into()), ..Default::default() },
        );
        assert!(out.is_empty());
    }

    #[test]
    fn urgent_only_uses_strict_threshold() {
        let mut patients = ward();
        patients[0].update_counter = 5;
        patients[1].update_counter = 6;

        let out = filter_patients(
            &patients,
            &PatientFilter { urgent_only: true, ..Default::default() },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p2", "counter 5 is excluded, 6 is included");
    }

    #[test]
    fn assignee_scope_narrows_to_one_doctor() {
        let mut patients = ward();
        patients[0].assigned_doctor = Some("doctor1".into());
        patients[2].assigned_doctor = Some("doctor2".into());

        let out = filter_patients(
            &patients,
            &PatientFilter { assignee: Some("doctor1".into()), ..Default::default() },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p1");
    }

    #[test]
    fn dimensions_combine_with_and() {
        let mut patients = ward();
        patients[1].update_counter = 9;

        let filter = PatientFilter {
            pathway: Some(Pathway::Emergency),
            stage: Some("ICU".into()),
            urgent_only: true,
            search: "smith".into(),
            ..Default::default()
        };
        let out = filter_patients(&patients, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p2");

        // Flip one dimension and the conjunction fails.
        let miss = PatientFilter { stage: Some("pre-op".into()), ..filter };
        assert!(filter_patients(&patients, &miss).is_empty());
    }

    #[test]
    fn find_patient_absent_id_is_none() {
        let patients = ward();
        assert_eq!(find_patient(&patients, "p2").map(|p| p.name.as_str()), Some("John Smith"));
        assert!(find_patient(&patients, "missing").is_none());
    }
}
