//! aria-audit roles command

use anyhow::Context;
use checks::{RoleResolver, TableRoleResolver};
use clap::Args;
use shared::{AllowedRoles, AuditConfig, ElementDescriptor, ElementRoles};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RolesCommand {
    /// Tag to inspect
    pub tag: String,

    /// Configuration file holding the role table
    #[arg(short, long)]
    pub config: PathBuf,

    /// Explicit role value to test against the tag
    #[arg(long)]
    pub role: Option<String>,
}

impl RolesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = AuditConfig::from_file(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;

        match config.role_table.get(&self.tag) {
            Some(rules) => println!("{}", describe_rules(&self.tag, rules)),
            None => println!("<{}> is not in the role table: any role is allowed", self.tag.to_lowercase()),
        }

        if let Some(role) = &self.role {
            let unallowed = self.test_role(&config, role)?;
            if unallowed.is_empty() {
                println!("✓ role=\"{}\" is allowed", role);
            } else {
                println!("✗ not allowed: {}", unallowed.join(", "));
            }
        }
        Ok(())
    }

    /// Unallowed roles for `role` on this tag under the configured options
    pub fn test_role(&self, config: &AuditConfig, role: &str) -> shared::Result<Vec<String>> {
        let resolver = TableRoleResolver::new(config.role_table.clone());
        let element = ElementDescriptor::new(&self.tag).with_role(role);
        resolver.unallowed_roles(&element, config.checks.aria_allowed_role.allow_implicit)
    }
}

fn describe_rules(tag: &str, rules: &ElementRoles) -> String {
    let implicit = if rules.implicit_roles.is_empty() {
        "(none)".to_string()
    } else {
        rules.implicit_roles.join(", ")
    };
    let allowed = match &rules.allowed_roles {
        AllowedRoles::Any => "any".to_string(),
        AllowedRoles::None => "none".to_string(),
        AllowedRoles::Only(roles) => roles.join(", "),
    };
    format!("<{}>\n  implicit: {}\n  allowed:  {}", tag.to_lowercase(), implicit, allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RoleTable;

    fn config() -> AuditConfig {
        let mut config = AuditConfig::default();
        config.role_table = RoleTable::new().with_element("a", ElementRoles {
            implicit_roles: vec!["link".to_string()],
            allowed_roles: AllowedRoles::Only(vec!["button".to_string()]),
        });
        config
    }

    fn command() -> RolesCommand {
        RolesCommand {
            tag: "A".to_string(),
            config: PathBuf::from("aria-audit.yaml"),
            role: None,
        }
    }

    #[test]
    fn test_role_against_table() {
        let cmd = command();
        assert!(cmd.test_role(&config(), "button").unwrap().is_empty());
        assert!(cmd.test_role(&config(), "link").unwrap().is_empty());
        assert_eq!(cmd.test_role(&config(), "tab button").unwrap(), vec!["tab"]);
    }

    #[test]
    fn test_role_strict_implicit() {
        let mut config = config();
        config.checks.aria_allowed_role.allow_implicit = false;
        assert_eq!(command().test_role(&config, "link").unwrap(), vec!["link"]);
    }

    #[test]
    fn test_describe_rules() {
        let config = config();
        let text = describe_rules("A", config.role_table.get("a").unwrap());
        assert_eq!(text, "<a>\n  implicit: link\n  allowed:  button");
    }
}
