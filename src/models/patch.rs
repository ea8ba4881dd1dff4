//! Gerrit change (patch set) model.
//!
//! Mirrors the fields the dashboard reads from the Gerrit `/changes/`
//! query payload. Unknown fields in the payload are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The label carrying automated pass/fail votes.
pub const VERIFIED_LABEL: &str = "Verified";

/// The label carrying human approval votes.
pub const CODE_REVIEW_LABEL: &str = "Code-Review";

/// An open Gerrit change as returned by the query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    /// Change number, unique per Gerrit instance.
    #[serde(rename = "_number")]
    pub number: i64,

    /// Commit subject line.
    pub subject: String,

    /// Change owner.
    pub owner: Account,

    /// Project the change belongs to.
    pub project: String,

    /// Explicitly marked not ready for review.
    #[serde(default)]
    pub work_in_progress: bool,

    /// Label name → vote data. A label may be absent entirely.
    #[serde(default)]
    pub labels: HashMap<String, Label>,
}

/// A Gerrit account reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub name: String,
}

/// Vote data for one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// All votes cast on the label. Gerrit omits this unless the query
    /// requested label details, so absence is a valid state.
    #[serde(default)]
    pub all: Option<Vec<Vote>>,
}

/// A single account's vote on a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    #[serde(default)]
    pub name: String,

    /// Gerrit omits `value` for accounts listed as reviewers that have
    /// not voted; absence is not the same as voting zero.
    #[serde(default)]
    pub value: Option<i32>,
}

impl Patch {
    /// Votes cast on `label`, or None when the label or its vote list is
    /// absent. An empty slice means the label is present but unvoted.
    pub fn votes(&self, label: &str) -> Option<&[Vote]> {
        self.labels.get(label).and_then(|l| l.all.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gerrit_payload() {
        let json = r#"{
            "_number": 5029,
            "subject": "Fix flaky retry logic",
            "owner": { "name": "Alice Smith" },
            "project": "platform/core",
            "labels": {
                "Verified": { "all": [ { "name": "jenkins", "value": 1 } ] },
                "Code-Review": { "all": [ { "name": "Bob" } ] }
            }
        }"#;
        let patch: Patch = serde_json::from_str(json).unwrap();
        assert_eq!(patch.number, 5029);
        assert!(!patch.work_in_progress);
        assert_eq!(patch.votes(VERIFIED_LABEL).unwrap().len(), 1);
        // Bob is listed as reviewer but has not voted.
        assert_eq!(patch.votes(CODE_REVIEW_LABEL).unwrap()[0].value, None);
    }

    #[test]
    fn test_absent_label_distinguished_from_empty() {
        let json = r#"{
            "_number": 7,
            "subject": "s",
            "owner": { "name": "o" },
            "project": "p",
            "work_in_progress": true,
            "labels": { "Verified": {} }
        }"#;
        let patch: Patch = serde_json::from_str(json).unwrap();
        assert!(patch.work_in_progress);
        // Label present but without a vote list.
        assert!(patch.votes(VERIFIED_LABEL).is_none());
        // Label absent entirely.
        assert!(patch.votes(CODE_REVIEW_LABEL).is_none());
    }
}
