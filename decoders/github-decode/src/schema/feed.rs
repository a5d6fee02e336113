//! User feed (timeline) entries
//!
//! Feed payloads are where the API's shape drift shows: `pull_request`,
//! `member` and `target` each arrive either as a bare identifier or as a
//! full object depending on the age of the event.

use serde::{Deserialize, Serialize};

use super::common::User;
use super::repo::Repository;
use crate::dates::{lenient_date, DateValue};
use crate::enums::wire_enum;
use crate::resolve::{ActorRef, PullRequestRef, TargetRef};

wire_enum! {
    /// Event type of a feed entry
    pub enum FeedEventType as "feed event type" {
        CommitComment => "CommitCommentEvent",
        Create => "CreateEvent",
        Delete => "DeleteEvent",
        Download => "DownloadEvent",
        Follow => "FollowEvent",
        Fork => "ForkEvent",
        ForkApply => "ForkApplyEvent",
        Gist => "GistEvent",
        Gollum => "GollumEvent",
        IssueComment => "IssueCommentEvent",
        Issues => "IssuesEvent",
        Member => "MemberEvent",
        Public => "PublicEvent",
        PullRequest => "PullRequestEvent",
        PullRequestReviewComment => "PullRequestReviewCommentEvent",
        Push => "PushEvent",
        TeamAdd => "TeamAddEvent",
        Watch => "WatchEvent",
    }
}

/// Summary of the user a follow event targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Target login
    pub login: String,

    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub gravatar_id: Option<String>,

    /// Public repository count
    #[serde(default)]
    pub repos: Option<u32>,

    /// Follower count
    #[serde(default)]
    pub followers: Option<u32>,
}

/// Event-specific payload of a feed entry
///
/// Only the fields relevant to an entry's event type are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPayload {
    /// Action performed (opened, closed, added, started, ...)
    #[serde(default)]
    pub action: Option<String>,

    /// Issue or pull request number
    #[serde(default)]
    pub number: Option<u64>,

    /// Pull request, bare or expanded
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,

    /// Added member, bare or expanded
    #[serde(default)]
    pub member: Option<ActorRef>,

    /// Followed user, bare or expanded
    #[serde(default)]
    pub target: Option<TargetRef>,

    /// Git ref name (create/delete/push)
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    /// Kind of ref created or deleted (branch, tag, repository)
    #[serde(default)]
    pub ref_type: Option<String>,

    /// Head commit SHA (push)
    #[serde(default)]
    pub head: Option<String>,

    /// Commit count (push)
    #[serde(default)]
    pub size: Option<u32>,

    /// Gist or page name
    #[serde(default)]
    pub name: Option<String>,

    /// Gist or download URL
    #[serde(default)]
    pub url: Option<String>,

    /// Issue ID (issues)
    #[serde(default)]
    pub issue: Option<u64>,

    /// Comment ID (comments)
    #[serde(default)]
    pub comment_id: Option<u64>,
}

/// One entry of a user's public timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeed {
    /// Event type
    #[serde(rename = "type")]
    pub feed_type: FeedEventType,

    /// Login of the acting user
    #[serde(default)]
    pub actor: Option<String>,

    /// Expanded acting user
    #[serde(default)]
    pub actor_attributes: Option<User>,

    /// Repository the event happened in
    #[serde(default)]
    pub repository: Option<Repository>,

    /// Event payload
    #[serde(default)]
    pub payload: Option<FeedPayload>,

    /// Whether the event is public
    #[serde(default)]
    pub public: bool,

    /// Link to the event subject
    #[serde(default)]
    pub url: Option<String>,

    /// Event time
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,
}

impl UserFeed {
    /// Pull request referenced by the payload, if any
    pub fn pull_request(&self) -> Option<&PullRequestRef> {
        self.payload.as_ref()?.pull_request.as_ref()
    }

    /// Member referenced by the payload, if any
    pub fn member(&self) -> Option<&ActorRef> {
        self.payload.as_ref()?.member.as_ref()
    }

    /// Follow target referenced by the payload, if any
    pub fn target(&self) -> Option<&TargetRef> {
        self.payload.as_ref()?.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_event_with_bare_login() {
        let entry: UserFeed = serde_json::from_value(json!({
            "type": "MemberEvent",
            "actor": "defunkt",
            "public": true,
            "created_at": "2011-03-01T12:54:43-08:00",
            "payload": {"action": "added", "member": "kneath"}
        }))
        .unwrap();

        assert_eq!(entry.feed_type, FeedEventType::Member);
        assert_eq!(entry.member().map(|m| m.login()), Some("kneath"));
        assert!(entry.pull_request().is_none());
    }

    #[test]
    fn test_follow_event_with_full_target() {
        let entry: UserFeed = serde_json::from_value(json!({
            "type": "FollowEvent",
            "payload": {"target": {"login": "pjhyett", "followers": 900, "repos": 20}}
        }))
        .unwrap();

        let target = entry.target().unwrap();
        assert_eq!(target.login(), "pjhyett");
        assert_eq!(target.full().and_then(|t| t.repos), Some(20));
    }

    #[test]
    fn test_null_polymorphic_field_is_absent() {
        let entry: UserFeed = serde_json::from_value(json!({
            "type": "PullRequestEvent",
            "payload": {"pull_request": null}
        }))
        .unwrap();
        assert!(entry.pull_request().is_none());
    }

    #[test]
    fn test_array_polymorphic_field_is_rejected() {
        let err = serde_json::from_value::<UserFeed>(json!({
            "type": "MemberEvent",
            "payload": {"member": ["kneath"]}
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("unexpected structural kind for `member`"));
    }
}
