//! Role and visibility resolvers consumed by checks

use shared::{AuditError, ElementDescriptor, RoleTable};
use std::sync::Arc;

/// Computes which of an element's explicit roles are not allowed
pub trait RoleResolver: Send + Sync {
    /// Unallowed roles in declaration order; empty means the role is allowed.
    /// Must be deterministic for a given element and flag.
    fn unallowed_roles(&self, element: &ElementDescriptor, allow_implicit: bool) -> shared::Result<Vec<String>>;
}

/// Decides whether an element is visible
pub trait VisibilityResolver: Send + Sync {
    /// With `ignore_descendant_styling`, an element whose content is only
    /// visually hidden counts as invisible.
    fn is_visible(&self, element: &ElementDescriptor, ignore_descendant_styling: bool) -> shared::Result<bool>;
}

impl<T: RoleResolver + ?Sized> RoleResolver for Arc<T> {
    fn unallowed_roles(&self, element: &ElementDescriptor, allow_implicit: bool) -> shared::Result<Vec<String>> {
        (**self).unallowed_roles(element, allow_implicit)
    }
}

impl<T: VisibilityResolver + ?Sized> VisibilityResolver for Arc<T> {
    fn is_visible(&self, element: &ElementDescriptor, ignore_descendant_styling: bool) -> shared::Result<bool> {
        (**self).is_visible(element, ignore_descendant_styling)
    }
}

/// Resolves unallowed roles against a user-supplied role table.
///
/// A role token is allowed when the table allows it for the tag, or when it
/// is one of the tag's implicit roles and `allow_implicit` is set. Tags absent
/// from the table allow any role. Unallowed tokens are reported once, in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct TableRoleResolver {
    table: RoleTable,
}

impl TableRoleResolver {
    pub fn new(table: RoleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RoleTable {
        &self.table
    }
}

impl RoleResolver for TableRoleResolver {
    fn unallowed_roles(&self, element: &ElementDescriptor, allow_implicit: bool) -> shared::Result<Vec<String>> {
        let tag = element.tag();
        let rules = match self.table.get(&tag) {
            Some(rules) => rules,
            // Tags missing from the table accept any role
            None => return Ok(Vec::new()),
        };

        let mut unallowed: Vec<String> = Vec::new();
        for role in element.explicit_roles() {
            if unallowed.contains(&role) {
                continue;
            }

            let allowed = (allow_implicit && rules.is_implicit(&role)) || rules.allowed_roles.allows(&role);
            if !allowed {
                unallowed.push(role);
            }
        }

        Ok(unallowed)
    }
}

/// Reads unallowed roles computed ahead of time and attached to the element.
///
/// The roles are only valid for the `allowImplicit` value they were computed
/// for; asking with a different value is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecomputedRoleResolver;

impl RoleResolver for PrecomputedRoleResolver {
    fn unallowed_roles(&self, element: &ElementDescriptor, allow_implicit: bool) -> shared::Result<Vec<String>> {
        match &element.unallowed_roles {
            Some(roles) => {
                let computed_with = element.computed_with_allow_implicit.unwrap_or(true);
                if computed_with != allow_implicit {
                    return Err(AuditError::resolver(
                        element.tag(),
                        format!(
                            "precomputed unallowed roles assume allowImplicit={}, audit requested allowImplicit={}",
                            computed_with, allow_implicit
                        ),
                    ));
                }
                Ok(roles.clone())
            }
            None if element.role().is_none() => Ok(Vec::new()),
            None => Err(AuditError::resolver(
                element.tag(),
                "element declares a role but carries no precomputed unallowed roles",
            )),
        }
    }
}

/// Visibility from the element's snapshot facts
#[derive(Debug, Clone, Copy, Default)]
pub struct FactsVisibility;

impl VisibilityResolver for FactsVisibility {
    fn is_visible(&self, element: &ElementDescriptor, ignore_descendant_styling: bool) -> shared::Result<bool> {
        let facts = element.visibility;
        if !facts.rendered {
            return Ok(false);
        }
        Ok(!(ignore_descendant_styling && facts.content_visually_hidden))
    }
}
