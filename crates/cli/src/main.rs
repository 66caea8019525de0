//! ARIA Audit CLI
//!
//! Usage:
//!   aria-audit init [dir]                  - Write a starter aria-audit.yaml
//!   aria-audit check <elements.json>       - Check explicit roles of elements
//!   aria-audit roles <tag> --config <file> - Show role rules for a tag

use clap::{Parser, Subcommand};
use cli::commands::{CheckCommand, InitCommand, RolesCommand};

#[derive(Parser)]
#[command(name = "aria-audit")]
#[command(about = "ARIA Audit - Checks that explicit ARIA roles are allowed on their elements")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an audit configuration
    Init(InitCommand),
    /// Audit element descriptors
    Check(CheckCommand),
    /// Inspect the role table
    Roles(RolesCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(cmd) => cmd.run(),
        Commands::Check(cmd) => {
            let has_violations = cmd.run()?;
            if has_violations {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Roles(cmd) => cmd.run(),
    }
}
