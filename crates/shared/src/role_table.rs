//! Role table types
//!
//! A role table lists, per tag, the element's implicit roles and which
//! explicit roles it may carry. Tables are supplied by the user; nothing
//! here encodes the ARIA-in-HTML conformance table itself.

use crate::AuditError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Explicit roles an element may carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AllowedRolesRepr", into = "AllowedRolesRepr")]
pub enum AllowedRoles {
    /// Any role is allowed
    #[default]
    Any,
    /// No explicit role is allowed
    None,
    /// Only the listed roles are allowed
    Only(Vec<String>),
}

impl AllowedRoles {
    /// Check if a lower-cased role token is allowed
    pub fn allows(&self, role: &str) -> bool {
        match self {
            AllowedRoles::Any => true,
            AllowedRoles::None => false,
            AllowedRoles::Only(roles) => roles.iter().any(|r| r.eq_ignore_ascii_case(role)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AllowedRolesRepr {
    Keyword(String),
    List(Vec<String>),
}

impl TryFrom<AllowedRolesRepr> for AllowedRoles {
    type Error = AuditError;

    fn try_from(repr: AllowedRolesRepr) -> Result<Self, Self::Error> {
        match repr {
            AllowedRolesRepr::Keyword(k) => match k.to_lowercase().as_str() {
                "any" => Ok(AllowedRoles::Any),
                "none" => Ok(AllowedRoles::None),
                other => Err(AuditError::Config(format!(
                    "allowedRoles must be 'any', 'none' or a list, got '{}'",
                    other
                ))),
            },
            AllowedRolesRepr::List(roles) => Ok(AllowedRoles::Only(
                roles.into_iter().map(|r| r.to_lowercase()).collect(),
            )),
        }
    }
}

impl From<AllowedRoles> for AllowedRolesRepr {
    fn from(allowed: AllowedRoles) -> Self {
        match allowed {
            AllowedRoles::Any => AllowedRolesRepr::Keyword("any".to_string()),
            AllowedRoles::None => AllowedRolesRepr::Keyword("none".to_string()),
            AllowedRoles::Only(roles) => AllowedRolesRepr::List(roles),
        }
    }
}

/// Role rules for one tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRoles {
    /// Roles the element has without an explicit declaration
    #[serde(default)]
    pub implicit_roles: Vec<String>,

    /// Explicit roles the element may carry
    #[serde(default)]
    pub allowed_roles: AllowedRoles,
}

impl ElementRoles {
    /// Check if a role token equals one of the implicit roles
    pub fn is_implicit(&self, role: &str) -> bool {
        self.implicit_roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// User-supplied role table keyed by tag name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTable {
    #[serde(default, deserialize_with = "lowercase_keys")]
    elements: HashMap<String, ElementRoles>,
}

fn lowercase_keys<'de, D>(deserializer: D) -> Result<HashMap<String, ElementRoles>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, ElementRoles>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(tag, roles)| (tag.to_lowercase(), roles)).collect())
}

impl RoleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add rules for a tag
    pub fn with_element(mut self, tag: impl Into<String>, roles: ElementRoles) -> Self {
        self.insert(tag, roles);
        self
    }

    /// Add rules for a tag, replacing existing rules
    pub fn insert(&mut self, tag: impl Into<String>, roles: ElementRoles) {
        self.elements.insert(tag.into().to_lowercase(), roles);
    }

    /// Look up rules for a tag (case-insensitive; keys are stored lower-cased)
    pub fn get(&self, tag: &str) -> Option<&ElementRoles> {
        self.elements.get(&tag.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
