//! # ARIA Audit Shared
//!
//! Common types used across all ARIA audit packages.

pub mod error;
pub mod element;
pub mod outcome;
pub mod role_table;
pub mod config;

// Re-exports
pub use error::*;
pub use element::*;
pub use outcome::*;
pub use role_table::*;
pub use config::*;
