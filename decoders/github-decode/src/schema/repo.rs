//! Repository type definitions
//!
//! Structs representing GitHub repository data as returned by the repos API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::language::Language;
use crate::dates::{lenient_date, DateValue};

/// Repository visibility, sent on the wire as the boolean `private`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepositoryVisibility {
    #[default]
    Public,
    Private,
}

impl RepositoryVisibility {
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            RepositoryVisibility::Private
        } else {
            RepositoryVisibility::Public
        }
    }

    pub fn is_private(self) -> bool {
        self == RepositoryVisibility::Private
    }
}

impl Serialize for RepositoryVisibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_private())
    }
}

impl<'de> Deserialize<'de> for RepositoryVisibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::from_private_flag)
    }
}

/// Represents a GitHub repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (without owner)
    pub name: String,

    /// Owner login
    #[serde(default)]
    pub owner: Option<String>,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Repository URL on GitHub
    #[serde(default)]
    pub url: Option<String>,

    /// Project homepage
    #[serde(default)]
    pub homepage: Option<String>,

    /// Whether repository is private
    #[serde(rename = "private", default)]
    pub visibility: RepositoryVisibility,

    /// Whether repository is a fork
    #[serde(default)]
    pub fork: bool,

    /// Fork count
    #[serde(default)]
    pub forks: Option<u32>,

    /// Watcher count
    #[serde(default)]
    pub watchers: Option<u32>,

    /// Open issue count
    #[serde(default)]
    pub open_issues: Option<u32>,

    /// Repository size in kilobytes
    #[serde(default)]
    pub size: Option<u64>,

    /// Primary language
    #[serde(default)]
    pub language: Option<Language>,

    /// Owning organization login, if any
    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub has_issues: Option<bool>,

    #[serde(default)]
    pub has_wiki: Option<bool>,

    #[serde(default)]
    pub has_downloads: Option<bool>,

    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,

    /// Last push timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub pushed_at: Option<DateValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_private_flag_maps_to_visibility() {
        let private: Repository =
            serde_json::from_value(json!({"name": "secret", "private": true})).unwrap();
        assert_eq!(private.visibility, RepositoryVisibility::Private);

        let public: Repository =
            serde_json::from_value(json!({"name": "open", "private": false})).unwrap();
        assert_eq!(public.visibility, RepositoryVisibility::Public);
    }

    #[test]
    fn test_missing_private_flag_defaults_public() {
        let repo: Repository = serde_json::from_value(json!({"name": "grit"})).unwrap();
        assert_eq!(repo.visibility, RepositoryVisibility::Public);
    }

    #[test]
    fn test_visibility_serializes_as_flag() {
        let repo: Repository =
            serde_json::from_value(json!({"name": "secret", "private": true})).unwrap();
        let back = serde_json::to_value(&repo).unwrap();
        assert_eq!(back["private"], json!(true));
    }

    #[test]
    fn test_language_is_an_enumeration() {
        let repo: Repository =
            serde_json::from_value(json!({"name": "grit", "language": "Ruby"})).unwrap();
        assert_eq!(repo.language, Some(Language::Ruby));

        let err = serde_json::from_value::<Repository>(json!({"name": "x", "language": "ruby"}))
            .unwrap_err();
        assert!(err.to_string().starts_with("unknown enumeration value for language"));
    }
}
