//! Types shared across GitHub entities
//!
//! Users appear in nearly every response, either nested (issue authors,
//! pull request owners, feed actors) or as the top-level entity.

use serde::{Deserialize, Serialize};

use crate::dates::{lenient_date, DateValue};

/// Represents a GitHub user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// GitHub login/username
    pub login: String,

    /// Numeric user ID
    #[serde(default)]
    pub id: Option<u64>,

    /// User's display name (may be empty)
    #[serde(default)]
    pub name: Option<String>,

    /// Public email address
    #[serde(default)]
    pub email: Option<String>,

    /// Company
    #[serde(default)]
    pub company: Option<String>,

    /// Location
    #[serde(default)]
    pub location: Option<String>,

    /// Blog URL
    #[serde(default)]
    pub blog: Option<String>,

    /// Gravatar hash
    #[serde(default)]
    pub gravatar_id: Option<String>,

    /// Account creation time
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,

    /// Number of public repositories
    #[serde(default)]
    pub public_repo_count: Option<u32>,

    /// Number of public gists
    #[serde(default)]
    pub public_gist_count: Option<u32>,

    /// Followers
    #[serde(default)]
    pub followers_count: Option<u32>,

    /// Users followed
    #[serde(default)]
    pub following_count: Option<u32>,
}
