//! Gist type definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dates::{lenient_date, DateValue};

/// Gist visibility, sent on the wire as the boolean `public`
///
/// Note the polarity is the opposite of repositories, which send `private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GistVisibility {
    #[default]
    Public,
    Private,
}

impl GistVisibility {
    pub fn from_public_flag(public: bool) -> Self {
        if public {
            GistVisibility::Public
        } else {
            GistVisibility::Private
        }
    }

    pub fn is_public(self) -> bool {
        self == GistVisibility::Public
    }
}

impl Serialize for GistVisibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_public())
    }
}

impl<'de> Deserialize<'de> for GistVisibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::from_public_flag)
    }
}

/// Represents a gist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    /// Gist ID (the backing repository name)
    pub repo: String,

    /// Gist description
    #[serde(default)]
    pub description: Option<String>,

    /// Owner login
    #[serde(default)]
    pub owner: Option<String>,

    /// File names in the gist
    #[serde(default)]
    pub files: Vec<String>,

    /// Whether the gist is public
    #[serde(rename = "public", default)]
    pub visibility: GistVisibility,

    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,
}
