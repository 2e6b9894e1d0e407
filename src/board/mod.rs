//! Task Board — kanban partitioning and the status-transition chain.
//!
//! Groups ward tasks into the fixed To Do / In Progress / Done columns and
//! applies the one-button card affordance: a task only ever moves to "the
//! next status". Cancelled tasks are deliberately absent from the board.

mod kanban;
mod types;

pub use kanban::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
