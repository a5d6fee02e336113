//! Issue type definitions
//!
//! Structs representing GitHub issue data as returned by the issues API.

use serde::{Deserialize, Serialize};

use crate::dates::{lenient_date, DateValue};
use crate::enums::wire_enum;

wire_enum! {
    /// Open/closed state shared by issues and pull requests
    pub enum IssueState as "issue state" {
        Open => "open",
        Closed => "closed",
    }
}

/// Represents a GitHub issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number (unique within repository)
    pub number: u64,

    /// Issue title
    #[serde(default)]
    pub title: Option<String>,

    /// Issue body/description (markdown)
    #[serde(default)]
    pub body: Option<String>,

    /// Login of the issue author
    #[serde(default)]
    pub user: Option<String>,

    /// Issue state
    pub state: IssueState,

    /// Applied label names
    #[serde(default)]
    pub labels: Vec<String>,

    /// Number of votes
    #[serde(default)]
    pub votes: Option<u32>,

    /// Number of comments
    #[serde(default)]
    pub comments: Option<u32>,

    /// Position in the issue list
    #[serde(default)]
    pub position: Option<f64>,

    /// Author's gravatar hash
    #[serde(default)]
    pub gravatar_id: Option<String>,

    /// Issue URL on GitHub
    #[serde(default)]
    pub html_url: Option<String>,

    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,

    /// Last update timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub updated_at: Option<DateValue>,

    /// Closed timestamp, if closed
    #[serde(default, deserialize_with = "lenient_date")]
    pub closed_at: Option<DateValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_from_v2_payload() {
        let issue: Issue = serde_json::from_value(json!({
            "gravatar_id": "fb1b7b1c5c2cd2b09c9e1fa2b2e87b39",
            "position": 1.0,
            "number": 1,
            "votes": 0,
            "created_at": "2010-05-26T13:30:09-07:00",
            "comments": 2,
            "body": "Something is broken",
            "title": "Crash on start",
            "updated_at": "2010-05-27T09:01:44",
            "closed_at": null,
            "user": "defunkt",
            "labels": ["bug"],
            "state": "open"
        }))
        .unwrap();

        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.user.as_deref(), Some("defunkt"));
        assert!(issue.created_at.is_some());
        assert!(issue.updated_at.is_some());
        assert_eq!(issue.closed_at, None);
    }

    #[test]
    fn test_unknown_issue_state() {
        let err = serde_json::from_value::<Issue>(json!({"number": 1, "state": "reopened"}))
            .unwrap_err();
        assert!(err.to_string().contains("unknown enumeration value for issue state"));
    }
}
