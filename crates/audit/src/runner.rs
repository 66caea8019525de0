//! Auditor - Runs checks over elements

use crate::report::{AuditEntry, AuditReport};
use checks::{AriaAllowedRole, Check, FactsVisibility, PrecomputedRoleResolver, TableRoleResolver};
use shared::{AriaAllowedRoleOptions, AuditConfig, ElementDescriptor};
use tracing::{info, warn};

/// Runs every registered check against every element
pub struct Auditor {
    checks: Vec<Box<dyn Check>>,
}

impl Auditor {
    /// Create an auditor with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Auditor resolving roles through the configured role table
    pub fn from_config(config: &AuditConfig) -> Self {
        let check = AriaAllowedRole::new(
            config.checks.aria_allowed_role.clone(),
            TableRoleResolver::new(config.role_table.clone()),
            FactsVisibility,
        );
        Self::new().with_check(check)
    }

    /// Auditor trusting unallowed roles already attached to each element
    pub fn precomputed(options: AriaAllowedRoleOptions) -> Self {
        let check = AriaAllowedRole::new(options, PrecomputedRoleResolver, FactsVisibility);
        Self::new().with_check(check)
    }

    /// Builder: register a check
    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Registered check ids
    pub fn check_ids(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    /// Audit a set of elements.
    ///
    /// A check that errors for one element is recorded in `errors` and the
    /// run continues.
    pub fn run(&self, elements: &[ElementDescriptor]) -> AuditReport {
        let mut report = AuditReport::new();

        for element in elements {
            for check in &self.checks {
                let entry = match check.evaluate(element) {
                    Ok(outcome) => AuditEntry::from_outcome(check.id(), element, &outcome),
                    Err(e) => {
                        warn!(
                            check = check.id(),
                            element = %element.display_name(),
                            error = %e,
                            "check failed"
                        );
                        AuditEntry::from_error(check.id(), element, &e)
                    }
                };
                report.push(entry);
            }
        }

        let stats = report.stats();
        info!(
            run_id = %report.run_id,
            elements = elements.len(),
            passed = stats.passed,
            failed = stats.failed,
            needs_review = stats.needs_review,
            errors = stats.errors,
            "audit complete"
        );
        report
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::EntryOutcome;
    use shared::{AllowedRoles, ElementRoles, RoleTable};

    fn config() -> AuditConfig {
        let mut config = AuditConfig::default();
        config.role_table = RoleTable::new()
            .with_element("div", ElementRoles {
                implicit_roles: vec!["generic".to_string()],
                allowed_roles: AllowedRoles::Only(vec!["group".to_string()]),
            })
            .with_element("footer", ElementRoles {
                implicit_roles: vec!["contentinfo".to_string()],
                allowed_roles: AllowedRoles::Only(vec!["group".to_string()]),
            });
        config
    }

    #[test]
    fn test_from_config_registers_check() {
        let auditor = Auditor::from_config(&config());
        assert_eq!(auditor.check_ids(), vec!["aria-allowed-role"]);
    }

    #[test]
    fn test_run_groups_outcomes() {
        let auditor = Auditor::from_config(&config());
        let elements = vec![
            ElementDescriptor::new("img"),
            ElementDescriptor::new("div").with_role("button"),
            ElementDescriptor::new("div").with_role("button").hidden(),
            ElementDescriptor::new("div").with_role("group"),
        ];

        let report = auditor.run(&elements);
        let stats = report.stats();

        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.needs_review, 1);
        assert_eq!(report.violations[0].data, Some(vec!["button".to_string()]));
        assert_eq!(report.incomplete[0].data, Some(vec!["button".to_string()]));
    }

    #[test]
    fn test_run_honours_ignored_tags() {
        let mut config = config();
        config.checks.aria_allowed_role.ignored_tags = vec!["FOOTER".to_string()];
        let auditor = Auditor::from_config(&config);

        let report = auditor.run(&[ElementDescriptor::new("footer").with_role("banner")]);
        assert_eq!(report.stats().passed, 1);
        assert!(report.passes[0].data.is_none());
    }

    #[test]
    fn test_run_records_errors_and_continues() {
        let auditor = Auditor::precomputed(AriaAllowedRoleOptions::default());
        let elements = vec![
            ElementDescriptor::new("div").with_role("button"),
            ElementDescriptor::new("div")
                .with_role("button")
                .with_unallowed_roles(vec!["button".to_string()]),
        ];

        let report = auditor.run(&elements);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].outcome, EntryOutcome::Error);
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn test_empty_auditor_produces_empty_report() {
        let auditor = Auditor::new();
        let report = auditor.run(&[ElementDescriptor::new("div")]);
        assert_eq!(report.stats().total(), 0);
    }
}
