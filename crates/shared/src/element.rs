//! Element descriptor types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Visibility facts reported for an element by the page snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFacts {
    /// Whether the element is rendered at all (not display:none, not hidden)
    #[serde(default = "default_rendered")]
    pub rendered: bool,

    /// Whether everything the element shows is visually hidden (sr-only style clipping)
    #[serde(default)]
    pub content_visually_hidden: bool,
}

fn default_rendered() -> bool {
    true
}

impl Default for VisibilityFacts {
    fn default() -> Self {
        Self {
            rendered: true,
            content_visually_hidden: false,
        }
    }
}

/// Read-only view of a DOM element
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    /// Tag name
    pub node_name: String,

    /// Element attributes
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// CSS selector used when reporting
    #[serde(default)]
    pub selector: Option<String>,

    /// Visibility facts
    #[serde(default)]
    pub visibility: VisibilityFacts,

    /// Unallowed roles computed ahead of time by an external resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unallowed_roles: Option<Vec<String>>,

    /// The `allowImplicit` value `unallowed_roles` was computed for (true when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_with_allow_implicit: Option<bool>,
}

impl ElementDescriptor {
    /// Create a descriptor for a tag
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into().to_lowercase(),
            attributes: HashMap::new(),
            selector: None,
            visibility: VisibilityFacts::default(),
            unallowed_roles: None,
            computed_with_allow_implicit: None,
        }
    }

    /// Builder: set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: set the explicit role attribute
    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.with_attribute("role", role)
    }

    /// Builder: set the selector
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Builder: mark the element as not rendered
    pub fn hidden(mut self) -> Self {
        self.visibility.rendered = false;
        self
    }

    /// Builder: mark the element's content as visually hidden
    pub fn with_visually_hidden_content(mut self) -> Self {
        self.visibility.content_visually_hidden = true;
        self
    }

    /// Builder: attach precomputed unallowed roles
    pub fn with_unallowed_roles(mut self, roles: Vec<String>) -> Self {
        self.unallowed_roles = Some(roles);
        self
    }

    /// Builder: record the `allowImplicit` value the precomputed roles assume
    pub fn computed_with_allow_implicit(mut self, allow_implicit: bool) -> Self {
        self.computed_with_allow_implicit = Some(allow_implicit);
        self
    }

    /// Lower-cased tag name
    pub fn tag(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Raw value of the role attribute
    pub fn role(&self) -> Option<&str> {
        self.attributes.get("role").map(|s| s.as_str())
    }

    /// Role tokens in declaration order, lower-cased
    pub fn explicit_roles(&self) -> Vec<String> {
        self.role()
            .map(|r| r.split_whitespace().map(|t| t.to_lowercase()).collect())
            .unwrap_or_default()
    }

    /// Label used in logs and reports
    pub fn display_name(&self) -> String {
        match &self.selector {
            Some(selector) => selector.clone(),
            None => format!("<{}>", self.tag()),
        }
    }
}
