//! Pull request discussion entries
//!
//! A pull request's discussion interleaves commits, issue comments and
//! review comments; the wire `type` says which.

use serde::{Deserialize, Serialize};

use super::common::User;
use crate::dates::{lenient_date, DateValue};
use crate::enums::wire_enum;

wire_enum! {
    /// Kind of discussion entry
    pub enum DiscussionType as "discussion type" {
        Commit => "Commit",
        IssueComment => "IssueComment",
        PullRequestReviewComment => "PullRequestReviewComment",
    }
}

/// One entry of a pull request discussion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    /// Entry kind
    #[serde(rename = "type")]
    pub discussion_type: DiscussionType,

    /// Comment body (comments only)
    #[serde(default)]
    pub body: Option<String>,

    /// Commit message (commits only)
    #[serde(default)]
    pub message: Option<String>,

    /// Commented commit (review comments only)
    #[serde(default)]
    pub commit_id: Option<String>,

    /// Author of the entry
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub updated_at: Option<DateValue>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub committed_date: Option<DateValue>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub authored_date: Option<DateValue>,
}
