//! Domain types for GitHub entities
//!
//! Field identifiers are the wire names (`lower_case_with_underscores`), so
//! serde's derived mapping is the naming policy; see [`crate::naming`] for
//! the same mapping applied to identifiers at runtime.

pub mod common;
pub mod discussion;
pub mod feed;
pub mod gist;
pub mod issue;
pub mod job;
pub mod language;
pub mod org;
pub mod pull_request;
pub mod repo;
pub mod tree;

pub use common::User;
pub use discussion::{Discussion, DiscussionType};
pub use feed::{FeedEventType, FeedPayload, Target, UserFeed};
pub use gist::{Gist, GistVisibility};
pub use issue::{Issue, IssueState};
pub use job::{Job, JobType};
pub use language::Language;
pub use org::{Organization, OrganizationType, Permission, Team};
pub use pull_request::PullRequest;
pub use repo::{Repository, RepositoryVisibility};
pub use tree::{Tree, TreeType};

use std::any::Any;
use std::fmt::Debug;

/// A top-level entity the API returns in lists
///
/// Decode observers receive sequences of `&dyn SchemaEntity` and can
/// downcast through [`SchemaEntity::as_any`].
pub trait SchemaEntity: Debug + Send + Sync + 'static {
    /// Short name of the entity kind (e.g., "issue")
    fn entity_kind(&self) -> &'static str;

    /// Access the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}

macro_rules! schema_entities {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl SchemaEntity for $ty {
                fn entity_kind(&self) -> &'static str {
                    $kind
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

schema_entities! {
    User => "user",
    Issue => "issue",
    PullRequest => "pull_request",
    Repository => "repository",
    Gist => "gist",
    Organization => "organization",
    Team => "team",
    Tree => "tree",
    Discussion => "discussion",
    Job => "job",
    UserFeed => "feed",
}
