//! AriaAllowedRole - Is the element's explicit ARIA role allowed?
//!
//! Follows the element conformance rules of ARIA in HTML
//! (<https://www.w3.org/TR/html-aria/#docconformance>) and the SVG implicit
//! semantics, as encoded by the injected [`RoleResolver`].

use crate::check::Check;
use crate::resolver::{RoleResolver, VisibilityResolver};
use shared::{AriaAllowedRoleOptions, CheckOutcome, ElementDescriptor};
use tracing::debug;

/// Check identifier
pub const CHECK_ID: &str = "aria-allowed-role";

/// Decide whether an element's explicit role is allowed.
///
/// `resolve` returns the element's unallowed roles for the given
/// `allow_implicit` flag; `is_visible` is always asked with descendant
/// styling ignored. Neither is called for ignored tags, and `is_visible`
/// is only called when there is something to report. Errors from either
/// are returned as-is.
pub fn evaluate<E, R, V>(
    options: &AriaAllowedRoleOptions,
    element: &ElementDescriptor,
    resolve: R,
    is_visible: V,
) -> Result<CheckOutcome, E>
where
    R: FnOnce(&ElementDescriptor, bool) -> Result<Vec<String>, E>,
    V: FnOnce(&ElementDescriptor, bool) -> Result<bool, E>,
{
    if options.is_ignored(&element.node_name) {
        return Ok(CheckOutcome::Pass);
    }

    let unallowed_roles = resolve(element, options.allow_implicit)?;
    if unallowed_roles.is_empty() {
        return Ok(CheckOutcome::Pass);
    }

    // Fail and Review carry the same evidence
    if !is_visible(element, true)? {
        return Ok(CheckOutcome::Review { unallowed_roles });
    }
    Ok(CheckOutcome::Fail { unallowed_roles })
}

/// The `aria-allowed-role` check bound to its resolvers
#[derive(Debug, Clone)]
pub struct AriaAllowedRole<R, V> {
    options: AriaAllowedRoleOptions,
    roles: R,
    visibility: V,
}

impl<R: RoleResolver, V: VisibilityResolver> AriaAllowedRole<R, V> {
    /// Create a new check
    pub fn new(options: AriaAllowedRoleOptions, roles: R, visibility: V) -> Self {
        Self {
            options,
            roles,
            visibility,
        }
    }

    /// Get the options
    pub fn options(&self) -> &AriaAllowedRoleOptions {
        &self.options
    }
}

impl<R: RoleResolver, V: VisibilityResolver> Check for AriaAllowedRole<R, V> {
    fn id(&self) -> &str {
        CHECK_ID
    }

    fn evaluate(&self, element: &ElementDescriptor) -> shared::Result<CheckOutcome> {
        let outcome = evaluate(
            &self.options,
            element,
            |el, allow_implicit| self.roles.unallowed_roles(el, allow_implicit),
            |el, ignore_descendant_styling| self.visibility.is_visible(el, ignore_descendant_styling),
        )?;

        debug!(
            check = CHECK_ID,
            element = %element.display_name(),
            verdict = ?outcome.verdict(),
            "evaluated"
        );
        Ok(outcome)
    }
}
