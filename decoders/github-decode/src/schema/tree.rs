//! Git tree entries

use serde::{Deserialize, Serialize};

use crate::enums::wire_enum;

wire_enum! {
    /// Kind of object a tree entry points at
    pub enum TreeType as "tree entry type" {
        Blob => "blob",
        Tree => "tree",
    }
}

/// One entry of a git tree listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Entry name
    pub name: String,

    /// Object SHA
    pub sha: String,

    /// File mode (e.g., "100644")
    #[serde(default)]
    pub mode: Option<String>,

    /// Entry kind
    #[serde(rename = "type")]
    pub tree_type: TreeType,

    /// Blob size in bytes
    #[serde(default)]
    pub size: Option<u64>,

    /// Blob MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
}
