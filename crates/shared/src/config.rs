//! Configuration types for ARIA audit

use crate::{AuditError, RoleTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for the `aria-allowed-role` check
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaAllowedRoleOptions {
    /// Treat an explicit role equal to the element's implicit role as allowed
    #[serde(default = "default_allow_implicit")]
    pub allow_implicit: bool,

    /// Tags for which the check is skipped (case-insensitive)
    #[serde(default)]
    pub ignored_tags: Vec<String>,
}

fn default_allow_implicit() -> bool {
    true
}

impl Default for AriaAllowedRoleOptions {
    fn default() -> Self {
        Self {
            allow_implicit: true,
            ignored_tags: Vec::new(),
        }
    }
}

impl AriaAllowedRoleOptions {
    /// Builder: set allow_implicit
    pub fn with_allow_implicit(mut self, allow_implicit: bool) -> Self {
        self.allow_implicit = allow_implicit;
        self
    }

    /// Builder: set ignored tags
    pub fn with_ignored_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignored_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a tag is exempt from the check
    pub fn is_ignored(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.ignored_tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Per-check option blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksConfig {
    #[serde(default)]
    pub aria_allowed_role: AriaAllowedRoleOptions,
}

/// Audit configuration file (`aria-audit.yaml` / `aria-audit.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub role_table: RoleTable,
}

impl AuditConfig {
    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject ignored tags that can never match an element
    pub fn validate(&self) -> crate::Result<()> {
        let ignored = &self.checks.aria_allowed_role.ignored_tags;
        if let Some(bad) = ignored.iter().find(|t| t.trim().is_empty() || t.contains(char::is_whitespace)) {
            return Err(AuditError::Config(format!("invalid ignored tag '{}'", bad)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_options_defaults() {
        let options: AriaAllowedRoleOptions = serde_json::from_str("{}").unwrap();
        assert!(options.allow_implicit);
        assert!(options.ignored_tags.is_empty());
        assert_eq!(options, AriaAllowedRoleOptions::default());
    }

    #[test]
    fn test_options_ignore_unknown_keys() {
        let json = r#"{ "allowImplicit": false, "ignoredTags": ["DIV"], "reviewOnFail": true }"#;
        let options: AriaAllowedRoleOptions = serde_json::from_str(json).unwrap();
        assert!(!options.allow_implicit);
        assert_eq!(options.ignored_tags, vec!["DIV"]);
    }

    #[test]
    fn test_is_ignored_case_insensitive() {
        let options = AriaAllowedRoleOptions::default().with_ignored_tags(["DIV", "Footer"]);
        assert!(options.is_ignored("div"));
        assert!(options.is_ignored("FOOTER"));
        assert!(!options.is_ignored("span"));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
checks:
  ariaAllowedRole:
    ignoredTags: [footer]
roleTable:
  elements:
    img:
      implicitRoles: [img]
      allowedRoles: none
"#
        )
        .unwrap();

        let config = AuditConfig::from_file(file.path()).unwrap();
        assert!(config.checks.aria_allowed_role.allow_implicit);
        assert!(config.checks.aria_allowed_role.is_ignored("footer"));
        assert_eq!(config.role_table.len(), 1);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "checks": {{ "ariaAllowedRole": {{ "allowImplicit": false }} }} }}"#).unwrap();

        let config = AuditConfig::from_file(file.path()).unwrap();
        assert!(!config.checks.aria_allowed_role.allow_implicit);
        assert!(config.role_table.is_empty());
    }

    #[test]
    fn test_load_rejects_blank_ignored_tag() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "checks:\n  ariaAllowedRole:\n    ignoredTags: ['  ']").unwrap();

        let err = AuditConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AuditConfig::from_file(Path::new("/nonexistent/aria-audit.yaml")).unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
    }
}
