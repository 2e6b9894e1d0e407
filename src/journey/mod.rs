//! Patient Journey — classification of timeline entries against the
//! patient's current stage.
//!
//! The journey view renders each recorded stage interval with a
//! completed / current / upcoming marker and an elapsed-duration badge.
//! Everything here is a pure derivation over an immutable snapshot; the
//! rendering layer owns placeholders ("no timeline") and chrome.

mod classify;
mod types;

pub use classify::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 18, hour, 0, 0).unwrap()
    }

    fn entry(state: &str, date_in: DateTime<Utc>, date_out: Option<DateTime<Utc>>) -> TimelineEntry {
        TimelineEntry {
            patient_id: "27e8d1ad".into(),
            state: state.into(),
            date_in,
            date_out,
            checklist_in: vec!["vitals-recorded".into()],
            checklist_out: vec![],
        }
    }

    // ── Classification ─────────────────────────────────────────────────

    #[test]
    fn empty_timeline_classifies_to_empty() {
        assert!(classify(&[], "Post-Op", t(12)).is_empty());
    }

    #[test]
    fn surgical_journey_statuses() {
        let entries = vec![
            entry("Pre-Op", t(8), Some(t(10))),
            entry("Surgery", t(10), Some(t(14))),
            entry("Post-Op", t(14), None),
        ];
        let classified = classify(&entries, "Post-Op", t(20));

        let statuses: Vec<_> = classified.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![StageStatus::Completed, StageStatus::Completed, StageStatus::Current]
        );
    }

    #[test]
    fn exit_takes_precedence_over_label_match() {
        // Re-entry into ICU: the first ICU interval is closed and must be
        // Completed even though its label matches the current stage.
        let entries = vec![
            entry("ICU", t(0), Some(t(6))),
            entry("Ward", t(6), None),
            entry("ICU", t(12), None),
        ];
        let classified = classify(&entries, "ICU", t(18));

        let statuses: Vec<_> = classified.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![StageStatus::Completed, StageStatus::Upcoming, StageStatus::Current]
        );
    }

    #[test]
    fn open_entry_with_other_label_is_upcoming() {
        let entries = vec![entry("Recovery", t(8), None)];
        let classified = classify(&entries, "Post-Op", t(12));
        assert_eq!(classified[0].status, StageStatus::Upcoming);
    }

    #[test]
    fn classification_preserves_entry_order_and_data() {
        let entries = vec![
            entry("Admission", t(8), Some(t(10))),
            entry("Pre-Op", t(10), None),
        ];
        let classified = classify(&entries, "Pre-Op", t(12));
        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].entry.state, "Admission");
        assert_eq!(classified[1].entry.state, "Pre-Op");
        assert_eq!(classified[0].entry.checklist_in, vec!["vitals-recorded"]);
    }

    // ── Duration labels ────────────────────────────────────────────────

    #[test]
    fn duration_under_a_day_in_hours() {
        assert_eq!(duration_label(t(8), Some(t(10)), t(23)), "2h");
        assert_eq!(duration_label(t(0), Some(t(23)), t(23)), "23h");
    }

    #[test]
    fn duration_of_a_day_or_more_in_days() {
        let start = t(8);
        assert_eq!(duration_label(start, Some(start + Duration::hours(24)), t(8)), "1d");
        assert_eq!(duration_label(start, Some(start + Duration::hours(71)), t(8)), "2d");
    }

    #[test]
    fn open_entry_measures_against_now() {
        assert_eq!(duration_label(t(8), None, t(13)), "5h");
    }

    #[test]
    fn sub_hour_and_negative_spans_clamp_to_zero_hours() {
        assert_eq!(duration_label(t(8), Some(t(8) + Duration::minutes(30)), t(9)), "0h");
        assert_eq!(duration_label(t(10), Some(t(8)), t(12)), "0h");
    }

    // ── Length of stay ─────────────────────────────────────────────────

    #[test]
    fn length_of_stay_from_first_entry() {
        let entries = vec![
            entry("Admission", t(8), Some(t(10))),
            entry("Pre-Op", t(10), None),
        ];
        let now = t(8) + Duration::days(3) + Duration::hours(5);
        assert_eq!(length_of_stay_days(&entries, now), Some(3));
    }

    #[test]
    fn length_of_stay_without_timeline_is_none() {
        assert_eq!(length_of_stay_days(&[], t(8)), None);
    }
}
