//! Field naming policy
//!
//! Domain identifiers are camelCase (`createdAt`), wire names are lower case
//! words joined by underscores (`created_at`). The schema's serde field names
//! already are the wire names; this module applies the same mapping to
//! identifiers that arrive at runtime, e.g. a field name given on the command
//! line for raw access.

use heck::{ToLowerCamelCase, ToSnakeCase};
use serde_json::{Map, Value};

/// Mapping between domain identifiers and wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNamingPolicy {
    /// Identifiers are used unchanged
    Identity,
    /// `createdAt` <-> `created_at`
    #[default]
    LowerCaseWithUnderscores,
}

impl FieldNamingPolicy {
    /// Wire name for a domain identifier
    ///
    /// Acronyms stay one word: `htmlURL` becomes `html_url`.
    pub fn to_wire(self, identifier: &str) -> String {
        match self {
            FieldNamingPolicy::Identity => identifier.to_string(),
            FieldNamingPolicy::LowerCaseWithUnderscores => identifier.to_snake_case(),
        }
    }

    /// Domain identifier for a wire name
    pub fn to_domain(self, wire: &str) -> String {
        match self {
            FieldNamingPolicy::Identity => wire.to_string(),
            FieldNamingPolicy::LowerCaseWithUnderscores => wire.to_lower_camel_case(),
        }
    }

    /// Look up a field of a raw object by domain identifier or wire name
    ///
    /// The name is tried as given first, then through the policy.
    pub fn lookup<'a>(self, object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
        object
            .get(name)
            .or_else(|| object.get(&self.to_wire(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        Discussion, FeedPayload, Gist, Issue, Job, Organization, PullRequest, Repository, Target,
        Team, Tree, User, UserFeed,
    };
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::json;

    const POLICY: FieldNamingPolicy = FieldNamingPolicy::LowerCaseWithUnderscores;

    fn wire_keys<T: DeserializeOwned + Serialize>(minimal: Value) -> Vec<String> {
        let entity: T = serde_json::from_value(minimal).unwrap();
        match serde_json::to_value(&entity).unwrap() {
            Value::Object(object) => object.keys().cloned().collect(),
            other => panic!("entity serialized to {other}"),
        }
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(POLICY.to_wire("createdAt"), "created_at");
        assert_eq!(POLICY.to_wire("publicRepoCount"), "public_repo_count");
        assert_eq!(POLICY.to_wire("login"), "login");
        assert_eq!(POLICY.to_wire("htmlURL"), "html_url");
    }

    #[test]
    fn test_to_domain() {
        assert_eq!(POLICY.to_domain("created_at"), "createdAt");
        assert_eq!(POLICY.to_domain("gravatar_id"), "gravatarId");
        assert_eq!(POLICY.to_domain("login"), "login");
    }

    #[test]
    fn test_round_trip_over_every_schema_field() {
        let mut keys = Vec::new();
        keys.extend(wire_keys::<User>(json!({"login": "octocat"})));
        keys.extend(wire_keys::<Issue>(json!({"number": 1, "state": "open"})));
        keys.extend(wire_keys::<PullRequest>(json!({"number": 1})));
        keys.extend(wire_keys::<Discussion>(json!({"type": "Commit"})));
        keys.extend(wire_keys::<Repository>(json!({"name": "grit"})));
        keys.extend(wire_keys::<Gist>(json!({"repo": "374130"})));
        keys.extend(wire_keys::<Organization>(json!({"login": "github"})));
        keys.extend(wire_keys::<Team>(json!({"name": "Owners", "permission": "admin"})));
        keys.extend(wire_keys::<Tree>(json!({"name": "README", "sha": "abc", "type": "blob"})));
        keys.extend(wire_keys::<Job>(json!({"id": "1", "type": "Contract", "title": "Dev"})));
        keys.extend(wire_keys::<UserFeed>(json!({"type": "PushEvent"})));
        keys.extend(wire_keys::<FeedPayload>(json!({})));
        keys.extend(wire_keys::<Target>(json!({"login": "holman"})));

        assert!(keys.len() > 100, "only {} keys collected", keys.len());
        for key in &keys {
            assert_eq!(&POLICY.to_wire(&POLICY.to_domain(key)), key);
        }
    }

    #[test]
    fn test_lookup_accepts_both_forms() {
        let object = json!({"created_at": "2020-01-02T03:04:05Z"});
        let object = object.as_object().unwrap();
        assert!(POLICY.lookup(object, "createdAt").is_some());
        assert!(POLICY.lookup(object, "created_at").is_some());
        assert!(POLICY.lookup(object, "updatedAt").is_none());
        assert!(FieldNamingPolicy::Identity.lookup(object, "createdAt").is_none());
    }
}
