//! Audit report types

use serde::{Deserialize, Serialize};
use shared::{CheckOutcome, ElementDescriptor};

/// What happened when a check ran against one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    Passed,
    Failed,
    NeedsReview,
    Error,
}

impl From<&CheckOutcome> for EntryOutcome {
    fn from(outcome: &CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Pass => EntryOutcome::Passed,
            CheckOutcome::Fail { .. } => EntryOutcome::Failed,
            CheckOutcome::Review { .. } => EntryOutcome::NeedsReview,
        }
    }
}

/// One check result for one element
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub check_id: String,
    pub node_name: String,
    pub selector: Option<String>,
    pub outcome: EntryOutcome,
    /// Unallowed roles on failure or review
    pub data: Option<Vec<String>>,
    /// Collaborator error message
    pub error: Option<String>,
}

impl AuditEntry {
    /// Entry for a completed check
    pub fn from_outcome(check_id: &str, element: &ElementDescriptor, outcome: &CheckOutcome) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            check_id: check_id.to_string(),
            node_name: element.tag(),
            selector: element.selector.clone(),
            outcome: outcome.into(),
            data: outcome.data().map(|d| d.to_vec()),
            error: None,
        }
    }

    /// Entry for a check that could not complete
    pub fn from_error(check_id: &str, element: &ElementDescriptor, error: &shared::AuditError) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            check_id: check_id.to_string(),
            node_name: element.tag(),
            selector: element.selector.clone(),
            outcome: EntryOutcome::Error,
            data: None,
            error: Some(error.to_string()),
        }
    }

    /// Selector when known, otherwise `<tag>`
    pub fn display_name(&self) -> String {
        match &self.selector {
            Some(selector) => selector.clone(),
            None => format!("<{}>", self.node_name),
        }
    }

    /// Failures and review items
    pub fn is_finding(&self) -> bool {
        matches!(self.outcome, EntryOutcome::Failed | EntryOutcome::NeedsReview)
    }
}

/// Results of one audit run, grouped by outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub run_id: uuid::Uuid,
    pub started_at: String,
    pub passes: Vec<AuditEntry>,
    pub violations: Vec<AuditEntry>,
    pub incomplete: Vec<AuditEntry>,
    pub errors: Vec<AuditEntry>,
}

impl AuditReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            started_at: chrono::Utc::now().to_rfc3339(),
            passes: Vec::new(),
            violations: Vec::new(),
            incomplete: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// File an entry under its outcome
    pub fn push(&mut self, entry: AuditEntry) {
        match entry.outcome {
            EntryOutcome::Passed => self.passes.push(entry),
            EntryOutcome::Failed => self.violations.push(entry),
            EntryOutcome::NeedsReview => self.incomplete.push(entry),
            EntryOutcome::Error => self.errors.push(entry),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> AuditStats {
        AuditStats {
            passed: self.passes.len(),
            failed: self.violations.len(),
            needs_review: self.incomplete.len(),
            errors: self.errors.len(),
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Default for AuditReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStats {
    pub passed: usize,
    pub failed: usize,
    pub needs_review: usize,
    pub errors: usize,
}

impl AuditStats {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.needs_review + self.errors
    }
}
