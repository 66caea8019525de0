//! # ARIA Audit Checks
//!
//! Conformance checks run against element descriptors.
//!
//! ## Components
//!
//! - `AriaAllowedRole` - Is the element's explicit role allowed?
//! - `TableRoleResolver` - Unallowed roles from a user-supplied role table
//! - `FactsVisibility` - Visibility from snapshot facts

pub mod check;
pub mod aria_allowed_role;
pub mod resolver;

pub use check::Check;
pub use aria_allowed_role::AriaAllowedRole;
pub use resolver::{
    FactsVisibility, PrecomputedRoleResolver, RoleResolver, TableRoleResolver, VisibilityResolver,
};
