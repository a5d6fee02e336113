//! Pull request references in event payloads
//!
//! Older feed entries carry just the pull request number, newer ones embed
//! the whole pull request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{deserialize_field, FieldError, PolymorphicField};
use crate::raw::preview;
use crate::schema::PullRequest;

/// A pull request as referenced from an event payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PullRequestRef {
    /// Bare pull request number
    Number(u64),
    /// Fully expanded pull request
    Full(Box<PullRequest>),
}

impl PullRequestRef {
    /// Pull request number, whichever variant was sent
    pub fn number(&self) -> u64 {
        match self {
            PullRequestRef::Number(number) => *number,
            PullRequestRef::Full(pull) => pull.number,
        }
    }

    /// The expanded pull request, if the response carried one
    pub fn full(&self) -> Option<&PullRequest> {
        match self {
            PullRequestRef::Number(_) => None,
            PullRequestRef::Full(pull) => Some(pull),
        }
    }
}

impl PolymorphicField for PullRequestRef {
    const FIELD: &'static str = "pull_request";
    const BARE_VARIANT: &'static str = "number";
    const RICH_VARIANT: &'static str = "full";

    type Rich = PullRequest;

    fn from_primitive(raw: &Value) -> Result<Self, FieldError> {
        let number = match raw {
            Value::Number(number) => number.as_u64(),
            Value::String(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse().ok()
            }
            _ => None,
        };

        number
            .map(PullRequestRef::Number)
            .ok_or_else(|| FieldError::InvalidIdentifier {
                field: Self::FIELD,
                expected: "pull request number",
                element: preview(raw),
            })
    }

    fn from_rich(rich: PullRequest) -> Self {
        PullRequestRef::Full(Box::new(rich))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            PullRequestRef::Number(_) => Self::BARE_VARIANT,
            PullRequestRef::Full(_) => Self::RICH_VARIANT,
        }
    }

    fn identity(&self) -> String {
        self.number().to_string()
    }
}

impl<'de> Deserialize<'de> for PullRequestRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_field(deserializer)
    }
}
