use chrono::{DateTime, Utc};

use crate::models::TimelineEntry;

use super::types::{ClassifiedEntry, StageStatus};

/// Classify each entry of a patient journey against the current stage.
///
/// Walks the entries in their stored `date_in` order. An entry with a
/// `date_out` is always `Completed`, even when its stage label equals
/// `current_state` — exit takes precedence over label matching, so a
/// re-entered stage (two "ICU" entries) classifies correctly. An open
/// entry matching the label is `Current`; everything else is `Upcoming`.
///
/// Pure: recomputed on every call, empty in gives empty out.
pub fn classify(
    entries: &[TimelineEntry],
    current_state: &str,
    now: DateTime<Utc>,
) -> Vec<ClassifiedEntry> {
    entries
        .iter()
        .map(|entry| ClassifiedEntry {
            status: stage_status(entry, current_state),
            duration_label: duration_label(entry.date_in, entry.date_out, now),
            entry: entry.clone(),
        })
        .collect()
}

fn stage_status(entry: &TimelineEntry, current_state: &str) -> StageStatus {
    if entry.state == current_state && entry.date_out.is_none() {
        StageStatus::Current
    } else if entry.date_out.is_some() {
        StageStatus::Completed
    } else {
        StageStatus::Upcoming
    }
}

/// Elapsed time between `date_in` and exit (or `now` while the stage is
/// open), floor-divided: whole hours under 24h, whole days after.
/// Negative spans (clock skew) clamp to "0h".
pub fn duration_label(
    date_in: DateTime<Utc>,
    date_out: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    let end = date_out.unwrap_or(now);
    let hours = (end - date_in).num_hours().max(0);

    if hours < 24 {
        format!("{hours}h")
    } else {
        format!("{}d", hours / 24)
    }
}

/// Whole days since the first entry's `date_in` — the "Length of Stay"
/// quick stat. `None` when the patient has no timeline yet.
pub fn length_of_stay_days(entries: &[TimelineEntry], now: DateTime<Utc>) -> Option<i64> {
    let first = entries.first()?;
    Some((now - first.date_in).num_days().max(0))
}
