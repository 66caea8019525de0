//! Check trait

use shared::{CheckOutcome, ElementDescriptor};

/// A conformance check evaluated once per element
pub trait Check: Send + Sync {
    /// Stable check identifier (e.g. `aria-allowed-role`)
    fn id(&self) -> &str;

    /// Evaluate the check for one element
    fn evaluate(&self, element: &ElementDescriptor) -> shared::Result<CheckOutcome>;
}
