//! Dashboard — KPI tiles and the patient-distribution heat map.
//!
//! The prototype showed hardcoded tile numbers; here every figure is
//! derived from the snapshot so the tiles, the list screens, and the board
//! can never disagree.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TaskStatus;
use crate::patients::URGENT_UPDATE_THRESHOLD;
use crate::snapshot::DataSnapshot;
use crate::view::{stage_variant, StageVariant};

/// The four KPI tiles at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_patients: u32,
    /// Open or in-progress tasks already overdue or due within 24 hours.
    pub tasks_due: u32,
    /// Unread urgent notifications plus patients over the urgent threshold.
    pub urgent_alerts: u32,
    /// Tasks in the snapshot's board already done. Tasks carry no
    /// completion timestamp, so the tile reads the current shift's board.
    pub completed_today: u32,
}

/// One cell of the stage heat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: String,
    pub count: u32,
    pub variant: StageVariant,
}

/// Everything the dashboard screen renders, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub kpis: KpiSummary,
    /// Patients per current stage, ordered by first appearance.
    pub stage_distribution: Vec<StageCount>,
}

impl DashboardData {
    pub fn derive(snapshot: &DataSnapshot, now: DateTime<Utc>) -> Self {
        let horizon = now + Duration::hours(24);
        let tasks_due = snapshot
            .tasks
            .iter()
            .filter(|t| {
                matches!(t.status, TaskStatus::Open | TaskStatus::InProgress) && t.due <= horizon
            })
            .count() as u32;

        let completed_today = snapshot
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count() as u32;

        let unread_urgent = snapshot
            .notifications
            .iter()
            .filter(|n| !n.read && n.kind == crate::models::NotificationType::Urgent)
            .count() as u32;
        let urgent_patients = snapshot
            .patients
            .iter()
            .filter(|p| p.update_counter > URGENT_UPDATE_THRESHOLD)
            .count() as u32;

        DashboardData {
            kpis: KpiSummary {
                total_patients: snapshot.patients.len() as u32,
                tasks_due,
                urgent_alerts: unread_urgent + urgent_patients,
                completed_today,
            },
            stage_distribution: stage_distribution(snapshot),
        }
    }
}

fn stage_distribution(snapshot: &DataSnapshot) -> Vec<StageCount> {
    let mut cells: Vec<StageCount> = Vec::new();
    for patient in &snapshot.patients {
        match cells.iter_mut().find(|c| c.stage == patient.current_state) {
            Some(cell) => cell.count += 1,
            None => cells.push(StageCount {
                stage: patient.current_state.clone(),
                count: 1,
                variant: stage_variant(&patient.current_state),
            }),
        }
    }
    cells
}
