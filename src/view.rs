//! Shared presentation lookups: stage severity variants, the update ring,
//! and "last updated" labels.
//!
//! Stage names are lower-cased before lookup here, unlike the filter
//! engine's exact stage match. The two behaviors are intentionally kept
//! separate; see DESIGN.md.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chip/heat-map severity derived from a stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageVariant {
    Default,
    Urgent,
    Stable,
    Caution,
}

/// Left-border accent for a patient card. Same stage buckets as
/// `StageVariant`, but the fallback is the medical accent rather than the
/// neutral chip color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAccent {
    Urgent,
    Caution,
    Stable,
    Medical,
}

/// Severity variant for a stage chip. Lookup is case-insensitive.
pub fn stage_variant(stage: &str) -> StageVariant {
    match stage.to_lowercase().as_str() {
        "icu" | "critical" => StageVariant::Urgent,
        "post-op" | "recovery" => StageVariant::Caution,
        "discharge" | "stable" => StageVariant::Stable,
        _ => StageVariant::Default,
    }
}

/// Card accent color for a stage. Lookup is case-insensitive.
pub fn card_accent(stage: &str) -> CardAccent {
    match stage.to_lowercase().as_str() {
        "icu" | "critical" => CardAccent::Urgent,
        "post-op" | "recovery" => CardAccent::Caution,
        "discharge" | "stable" => CardAccent::Stable,
        _ => CardAccent::Medical,
    }
}

/// Update count at which the ring renders completely full.
pub const RING_FULL_COUNT: u32 = 20;

/// Ring fill fraction in 0.0..=1.0. The ring itself is hidden at zero.
pub fn ring_progress(count: u32) -> f32 {
    (count as f32 / RING_FULL_COUNT as f32).min(1.0)
}

pub fn ring_visible(count: u32) -> bool {
    count > 0
}

/// Center badge text; triple digits collapse to "99+".
pub fn ring_badge_label(count: u32) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

/// "Just now" under an hour, then whole hours, then whole days.
pub fn last_updated_label(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - last_updated).num_hours().max(0);

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}
