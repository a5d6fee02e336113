//! Pull Request type definitions
//!
//! Structs representing GitHub pull request data as returned by the pulls API
//! and embedded in expanded feed payloads.

use serde::{Deserialize, Serialize};

use super::common::User;
use super::discussion::Discussion;
use super::issue::IssueState;
use crate::dates::{lenient_date, DateValue};

/// Represents a GitHub pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (unique within repository)
    pub number: u64,

    /// PR title
    #[serde(default)]
    pub title: Option<String>,

    /// PR body/description (markdown)
    #[serde(default)]
    pub body: Option<String>,

    /// PR state
    #[serde(default)]
    pub state: Option<IssueState>,

    /// PR author
    #[serde(default)]
    pub user: Option<User>,

    /// Author of the underlying issue
    #[serde(default)]
    pub issue_user: Option<User>,

    /// Applied label names
    #[serde(default)]
    pub labels: Vec<String>,

    /// Number of votes
    #[serde(default)]
    pub votes: Option<u32>,

    /// Number of comments
    #[serde(default)]
    pub comments: Option<u32>,

    /// Whether the PR can be merged cleanly
    #[serde(default)]
    pub mergeable: Option<bool>,

    /// PR URL on GitHub
    #[serde(default)]
    pub html_url: Option<String>,

    /// Diff URL
    #[serde(default)]
    pub diff_url: Option<String>,

    /// Patch URL
    #[serde(default)]
    pub patch_url: Option<String>,

    /// Commits and comments on the PR
    #[serde(default)]
    pub discussion: Vec<Discussion>,

    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,

    /// Last update timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub updated_at: Option<DateValue>,

    /// Closed timestamp, if closed
    #[serde(default, deserialize_with = "lenient_date")]
    pub closed_at: Option<DateValue>,

    /// Merged timestamp, if merged
    #[serde(default, deserialize_with = "lenient_date")]
    pub merged_at: Option<DateValue>,
}
