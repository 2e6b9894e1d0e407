use serde::{Deserialize, Serialize};

use super::enums::Pathway;

/// Chip rows offered by the filter popup. "all" is rendered by the UI; the
/// typed filter represents it as `None`.
pub const PATHWAY_FILTERS: [Pathway; 3] =
    [Pathway::Surgical, Pathway::Emergency, Pathway::Consultation];

pub const STAGE_FILTERS: [&str; 7] = [
    "pre-op",
    "surgery",
    "post-op",
    "ICU",
    "recovery",
    "stable",
    "discharge",
];

/// Filter specification for the patients list. Recomputed per interaction,
/// discarded on navigation away; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientFilter {
    /// `None` means "all pathways".
    pub pathway: Option<Pathway>,
    /// `None` means "all stages". Matching is exact and case-sensitive
    /// against the stored stage string.
    pub stage: Option<String>,
    pub urgent_only: bool,
    /// Free-text search over name and diagnosis, case-insensitive.
    pub search: String,
    /// `None` means "any assignee".
    pub assignee: Option<String>,
}

impl PatientFilter {
    /// The "Clear All Filters" intent: resets the popup dimensions only.
    /// Search text (and assignee scope) deliberately survive.
    pub fn clear(&mut self) {
        self.pathway = None;
        self.stage = None;
        self.urgent_only = false;
    }

    /// Number of non-default popup dimensions (pathway, stage, urgent-only).
    /// Search and assignee scope do not count toward the badge.
    pub fn active_count(&self) -> u32 {
        u32::from(self.pathway.is_some())
            + u32::from(self.stage.is_some())
            + u32::from(self.urgent_only)
    }
}
