//! Wardflow — the derivation core of a hospital patient-management
//! dashboard.
//!
//! A rendering layer supplies immutable record snapshots and invokes
//! intents (status change, filter change, mark-read); this crate derives
//! view-ready state from them: classified patient journeys, filtered
//! patient lists, kanban columns, notification counts, and dashboard
//! KPIs. Every derivation is recomputed in full from its inputs — no
//! incremental patching, no shared mutable state, no I/O.

pub mod board; // Kanban partitioning + status-transition chain
pub mod config;
pub mod dashboard; // KPI tiles + stage heat map
pub mod error;
pub mod intake; // Add-patient validation and admission
pub mod journey; // Timeline classification
pub mod models;
pub mod notifications; // Read-state holder
pub mod patients; // Patient list filter engine
pub mod profile; // Staff profile view model
pub mod snapshot; // Data seam + canonical mock fixture
pub mod telemetry;
pub mod view; // Shared presentation lookups

pub use error::CoreError;
