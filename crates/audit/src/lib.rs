//! # ARIA Audit Engine
//!
//! Runs checks over element descriptors and aggregates the results.

mod report;
mod runner;

pub use report::{AuditEntry, AuditReport, AuditStats, EntryOutcome};
pub use runner::Auditor;
