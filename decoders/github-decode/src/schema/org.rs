//! Organization and team type definitions

use serde::{Deserialize, Serialize};

use crate::dates::{lenient_date, DateValue};
use crate::enums::wire_enum;

wire_enum! {
    /// Account type of an organization record
    pub enum OrganizationType as "organization type" {
        Organization => "Organization",
        User => "User",
    }
}

wire_enum! {
    /// Access level granted to a team
    pub enum Permission as "permission" {
        Pull => "pull",
        Push => "push",
        Admin => "admin",
    }
}

/// Represents a GitHub organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization login
    pub login: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Account type
    #[serde(rename = "type", default)]
    pub org_type: Option<OrganizationType>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub blog: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub gravatar_id: Option<String>,

    #[serde(default)]
    pub public_repo_count: Option<u32>,

    #[serde(default)]
    pub public_gist_count: Option<u32>,

    #[serde(default)]
    pub followers_count: Option<u32>,

    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateValue>,
}

/// Represents a team within an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team name
    pub name: String,

    /// Team ID
    #[serde(default)]
    pub id: Option<u64>,

    /// Access level
    pub permission: Permission,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_permission() {
        let team: Team =
            serde_json::from_value(json!({"name": "Owners", "id": 3, "permission": "admin"}))
                .unwrap();
        assert_eq!(team.permission, Permission::Admin);
    }

    #[test]
    fn test_organization_type() {
        let org: Organization = serde_json::from_value(json!({
            "login": "github",
            "type": "Organization",
            "created_at": "2008-05-10T21:37:31Z"
        }))
        .unwrap();
        assert_eq!(org.org_type, Some(OrganizationType::Organization));
        assert!(org.created_at.is_some());
    }
}
