//! aria-audit check command

use crate::commands::init::default_config_path;
use anyhow::Context;
use audit::{AuditEntry, AuditReport, Auditor};
use clap::Args;
use shared::{AuditConfig, ElementDescriptor};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// JSON file with an array of element descriptors
    pub input: PathBuf,

    /// Configuration file (defaults to ./aria-audit.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip elements with this tag (repeatable)
    #[arg(long = "ignore-tag", value_name = "TAG")]
    pub ignore_tags: Vec<String>,

    /// Report explicit roles that repeat the implicit role
    #[arg(long)]
    pub no_allow_implicit: bool,

    /// Use the unallowedRoles attached to each element instead of the role table
    #[arg(long)]
    pub precomputed: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the audit; returns whether violations were found
    pub fn run(&self) -> anyhow::Result<bool> {
        let config = self.load_config()?;
        let elements = load_elements(&self.input)?;
        let report = self.audit(config, &elements);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.export_json())?);
        } else {
            print_summary(&report);
        }
        Ok(report.has_violations())
    }

    /// Apply command-line overrides to the loaded configuration and audit
    pub fn audit(&self, mut config: AuditConfig, elements: &[ElementDescriptor]) -> AuditReport {
        config
            .checks
            .aria_allowed_role
            .ignored_tags
            .extend(self.ignore_tags.iter().cloned());
        if self.no_allow_implicit {
            config.checks.aria_allowed_role.allow_implicit = false;
        }

        let auditor = if self.precomputed {
            Auditor::precomputed(config.checks.aria_allowed_role.clone())
        } else {
            Auditor::from_config(&config)
        };
        auditor.run(elements)
    }

    fn load_config(&self) -> anyhow::Result<AuditConfig> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => {
                let fallback = default_config_path(Path::new("."));
                if !fallback.exists() {
                    debug!("no configuration file, using defaults");
                    return Ok(AuditConfig::default());
                }
                fallback
            }
        };

        AuditConfig::from_file(&path).with_context(|| format!("failed to load {}", path.display()))
    }
}

/// Load element descriptors from a JSON array
pub fn load_elements(path: &Path) -> anyhow::Result<Vec<ElementDescriptor>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let elements = serde_json::from_str(&content)
        .with_context(|| format!("{} is not an array of element descriptors", path.display()))?;
    Ok(elements)
}

fn print_summary(report: &AuditReport) {
    let stats = report.stats();

    for entry in &report.violations {
        println!("✗ {}", describe(entry));
    }
    for entry in &report.incomplete {
        println!("? {} (hidden, needs review)", describe(entry));
    }
    for entry in &report.errors {
        println!(
            "! {}: {}",
            entry.display_name(),
            entry.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!();
    println!(
        "{} passed, {} failed, {} need review, {} errors",
        stats.passed, stats.failed, stats.needs_review, stats.errors
    );
}

fn describe(entry: &AuditEntry) -> String {
    let roles = entry.data.as_deref().unwrap_or_default().join(", ");
    format!("{}: role(s) not allowed: {}", entry.display_name(), roles)
}
