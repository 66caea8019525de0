//! Check outcome types

use serde::{Deserialize, Serialize};

/// Result of a single check against a single element.
///
/// `Fail` and `Review` carry the unallowed roles that caused them; `Pass`
/// never carries evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CheckOutcome {
    Pass,
    Fail {
        #[serde(rename = "unallowedRoles")]
        unallowed_roles: Vec<String>,
    },
    Review {
        #[serde(rename = "unallowedRoles")]
        unallowed_roles: Vec<String>,
    },
}

impl CheckOutcome {
    /// Tri-state verdict: `Some(true)` pass, `Some(false)` fail, `None` needs review
    pub fn verdict(&self) -> Option<bool> {
        match self {
            CheckOutcome::Pass => Some(true),
            CheckOutcome::Fail { .. } => Some(false),
            CheckOutcome::Review { .. } => None,
        }
    }

    /// Evidence attached to the outcome
    pub fn data(&self) -> Option<&[String]> {
        match self {
            CheckOutcome::Pass => None,
            CheckOutcome::Fail { unallowed_roles } | CheckOutcome::Review { unallowed_roles } => {
                Some(unallowed_roles.as_slice())
            }
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckOutcome::Fail { .. })
    }

    pub fn needs_review(&self) -> bool {
        matches!(self, CheckOutcome::Review { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        let roles = vec!["button".to_string()];

        assert_eq!(CheckOutcome::Pass.verdict(), Some(true));
        assert_eq!(CheckOutcome::Fail { unallowed_roles: roles.clone() }.verdict(), Some(false));
        assert_eq!(CheckOutcome::Review { unallowed_roles: roles }.verdict(), None);
    }

    #[test]
    fn test_data_only_on_non_pass() {
        assert!(CheckOutcome::Pass.data().is_none());

        let fail = CheckOutcome::Fail { unallowed_roles: vec!["menu".to_string()] };
        assert_eq!(fail.data(), Some(&["menu".to_string()][..]));
    }

    #[test]
    fn test_serialize_shape() {
        let review = CheckOutcome::Review { unallowed_roles: vec!["banner".to_string()] };
        let json = serde_json::to_value(&review).unwrap();

        assert_eq!(json["result"], "review");
        assert_eq!(json["unallowedRoles"][0], "banner");

        let pass = serde_json::to_value(CheckOutcome::Pass).unwrap();
        assert_eq!(pass, serde_json::json!({ "result": "pass" }));
    }
}
