//! Registry of decoding rules
//!
//! One table binding every wire enumeration, boolean-mapped enumeration and
//! polymorphic field to the rule that decodes it, alongside the date
//! fallback chain. The registry is built on first use and never mutated
//! afterwards, so it is shared without synchronization.

use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

use crate::dates::{DateFormat, FALLBACK_CHAIN};
use crate::enums::{UnknownVariant, WireEnum};
use crate::resolve::{self, ActorRef, FieldError, PolymorphicField, PullRequestRef, TargetRef};
use crate::schema::{
    DiscussionType, FeedEventType, IssueState, JobType, Language, OrganizationType, Permission,
    TreeType,
};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide rule registry
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Decoding rule of one wire enumeration
#[derive(Debug, Clone, Serialize)]
pub struct EnumRule {
    /// Enumeration name
    pub type_name: &'static str,
    /// Accepted wire strings, in declaration order
    pub wire_values: Vec<&'static str>,
    /// Map a wire string to its canonical form, or fail
    #[serde(skip)]
    pub decode: fn(&str) -> Result<&'static str, UnknownVariant>,
}

/// Decoding rule of an enumeration sent as a boolean flag
#[derive(Debug, Clone, Serialize)]
pub struct FlagRule {
    pub type_name: &'static str,
    /// Wire field carrying the flag
    pub wire_field: &'static str,
    pub when_true: &'static str,
    pub when_false: &'static str,
}

/// Outcome of resolving a polymorphic field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub field: &'static str,
    pub variant: &'static str,
    pub identity: String,
}

/// Decoding rule of one polymorphic field
#[derive(Debug, Clone, Serialize)]
pub struct PolymorphicRule {
    /// Wire name of the field
    pub field: &'static str,
    /// Variant chosen for primitives
    pub bare_variant: &'static str,
    /// Variant chosen for objects
    pub rich_variant: &'static str,
    /// Resolve a raw value with this field's resolver
    #[serde(skip)]
    pub resolve: fn(Value) -> Result<Resolution, FieldError>,
}

/// All decoding rules
#[derive(Debug, Serialize)]
pub struct Registry {
    date_formats: Vec<DateFormatRule>,
    enums: Vec<EnumRule>,
    flags: Vec<FlagRule>,
    fields: Vec<PolymorphicRule>,
}

/// Serializable view of one date format
#[derive(Debug, Clone, Serialize)]
pub struct DateFormatRule {
    pub name: &'static str,
    pub pattern: &'static str,
    #[serde(skip)]
    pub format: DateFormat,
}

impl Registry {
    fn build() -> Self {
        Self {
            date_formats: FALLBACK_CHAIN
                .iter()
                .map(|format| DateFormatRule {
                    name: format.name(),
                    pattern: format.pattern(),
                    format: *format,
                })
                .collect(),
            enums: vec![
                enum_rule::<IssueState>(),
                enum_rule::<OrganizationType>(),
                enum_rule::<Permission>(),
                enum_rule::<TreeType>(),
                enum_rule::<DiscussionType>(),
                enum_rule::<JobType>(),
                enum_rule::<FeedEventType>(),
                enum_rule::<Language>(),
            ],
            flags: vec![
                FlagRule {
                    type_name: "repository visibility",
                    wire_field: "private",
                    when_true: "private",
                    when_false: "public",
                },
                FlagRule {
                    type_name: "gist visibility",
                    wire_field: "public",
                    when_true: "public",
                    when_false: "private",
                },
            ],
            fields: vec![
                field_rule::<PullRequestRef>(),
                field_rule::<ActorRef>(),
                field_rule::<TargetRef>(),
            ],
        }
    }

    /// Date formats in fallback order
    pub fn date_formats(&self) -> &[DateFormatRule] {
        &self.date_formats
    }

    pub fn enums(&self) -> &[EnumRule] {
        &self.enums
    }

    /// Find an enumeration rule by name
    pub fn enum_rule(&self, type_name: &str) -> Option<&EnumRule> {
        self.enums.iter().find(|rule| rule.type_name == type_name)
    }

    pub fn flags(&self) -> &[FlagRule] {
        &self.flags
    }

    pub fn fields(&self) -> &[PolymorphicRule] {
        &self.fields
    }

    /// Find a polymorphic field rule by wire field name
    pub fn field_rule(&self, field: &str) -> Option<&PolymorphicRule> {
        self.fields.iter().find(|rule| rule.field == field)
    }
}

fn enum_rule<E: WireEnum>() -> EnumRule {
    EnumRule {
        type_name: E::TYPE_NAME,
        wire_values: E::VARIANTS.iter().map(E::wire).collect(),
        decode: decode_wire::<E>,
    }
}

fn decode_wire<E: WireEnum>(value: &str) -> Result<&'static str, UnknownVariant> {
    E::from_wire(value).map(|variant| variant.wire())
}

fn field_rule<F: PolymorphicField>() -> PolymorphicRule {
    PolymorphicRule {
        field: F::FIELD,
        bare_variant: F::BARE_VARIANT,
        rich_variant: F::RICH_VARIANT,
        resolve: resolve_field::<F>,
    }
}

fn resolve_field<F: PolymorphicField>(raw: Value) -> Result<Resolution, FieldError> {
    let resolved = resolve::resolve::<F>(raw)?;
    Ok(Resolution {
        field: F::FIELD,
        variant: resolved.variant_name(),
        identity: resolved.identity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_wire_string_round_trips() {
        for rule in registry().enums() {
            assert!(!rule.wire_values.is_empty(), "{} has no values", rule.type_name);
            for wire in &rule.wire_values {
                assert_eq!((rule.decode)(wire), Ok(*wire), "{}", rule.type_name);
            }
        }
    }

    #[test]
    fn test_unregistered_wire_string_fails() {
        for rule in registry().enums() {
            let err = (rule.decode)("definitely-not-a-value").unwrap_err();
            assert_eq!(err.type_name, rule.type_name);
        }
    }

    #[test]
    fn test_enum_lookup_by_name() {
        let rule = registry().enum_rule("permission").unwrap();
        assert_eq!(rule.wire_values, vec!["pull", "push", "admin"]);

        let language = registry().enum_rule("language").unwrap();
        assert_eq!((language.decode)("C++"), Ok("C++"));
        assert!((language.decode)("Brainfuck").is_err());
    }

    #[test]
    fn test_date_formats_follow_chain() {
        let names: Vec<_> = registry().date_formats().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["primary", "iso-local", "verbose-utc"]);
    }

    #[test]
    fn test_field_rules_resolve() {
        let pull = registry().field_rule("pull_request").unwrap();
        assert_eq!(
            (pull.resolve)(json!(12)).unwrap(),
            Resolution {
                field: "pull_request",
                variant: "number",
                identity: "12".to_string(),
            }
        );

        let member = registry().field_rule("member").unwrap();
        let resolution = (member.resolve)(json!({"login": "kneath"})).unwrap();
        assert_eq!(resolution.variant, "user");
        assert_eq!(resolution.identity, "kneath");

        let target = registry().field_rule("target").unwrap();
        assert!((target.resolve)(json!([])).is_err());
    }

    #[test]
    fn test_registry_serializes_without_functions() {
        let value = serde_json::to_value(registry()).unwrap();
        assert_eq!(value["fields"][0]["field"], json!("pull_request"));
        assert!(value["enums"][0].get("decode").is_none());
    }
}
