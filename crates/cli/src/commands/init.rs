//! aria-audit init command

use clap::Args;
use std::path::{Path, PathBuf};

/// File name written by `init`
pub const CONFIG_FILE: &str = "aria-audit.yaml";

const STARTER_CONFIG: &str = r#"checks:
  ariaAllowedRole:
    allowImplicit: true
    ignoredTags: []

# Role rules per tag. Tags not listed accept any explicit role.
# allowedRoles is 'any', 'none' or a list of roles.
roleTable:
  elements:
    img:
      implicitRoles: [img]
      allowedRoles: [none, presentation]
    a:
      implicitRoles: [link]
      allowedRoles: [button, checkbox, menuitem, menuitemcheckbox, menuitemradio, option, radio, switch, tab, treeitem]
    footer:
      implicitRoles: [contentinfo]
      allowedRoles: [group, none, presentation]
    head:
      allowedRoles: none
"#;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = self.write_config()?;
        println!("✓ Wrote {}", path.display());
        Ok(())
    }

    /// Write the starter configuration, returning its path
    pub fn write_config(&self) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(CONFIG_FILE);

        if path.exists() && !self.force {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }

        std::fs::write(&path, STARTER_CONFIG)?;
        Ok(path)
    }
}

/// Default config path inside a directory
pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AuditConfig;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InitCommand { directory: dir.path().to_path_buf(), force: false };

        let path = cmd.write_config().unwrap();
        assert_eq!(path, default_config_path(dir.path()));

        let config = AuditConfig::from_file(&path).unwrap();
        assert!(config.checks.aria_allowed_role.allow_implicit);
        assert!(config.role_table.get("img").is_some());
        assert!(!config.role_table.get("head").unwrap().allowed_roles.allows("banner"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InitCommand { directory: dir.path().to_path_buf(), force: false };
        cmd.write_config().unwrap();

        assert!(cmd.write_config().is_err());

        let forced = InitCommand { directory: dir.path().to_path_buf(), force: true };
        assert!(forced.write_config().is_ok());
    }
}
