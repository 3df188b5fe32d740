//! Core domain models for goupdate
//!
//! This module contains the result types shared by the orchestrator and the
//! output formatters:
//! - Per-dependency outcomes and skip reasons
//! - The report of a whole run

mod summary;
mod update_result;

pub use summary::UpdateReport;
pub use update_result::{SkipReason, UpdateOutcome};
