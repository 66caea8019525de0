//! CLI Commands

pub mod init;
pub mod check;
pub mod roles;

pub use init::InitCommand;
pub use check::CheckCommand;
pub use roles::RolesCommand;
