//! Follow targets in event payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{deserialize_field, login_from_primitive, FieldError, PolymorphicField};
use crate::schema::Target;

/// The user a follow event points at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TargetRef {
    /// Bare login
    Login(String),
    /// Target summary object
    Full(Box<Target>),
}

impl TargetRef {
    /// Login of the target, whichever variant was sent
    pub fn login(&self) -> &str {
        match self {
            TargetRef::Login(login) => login,
            TargetRef::Full(target) => &target.login,
        }
    }

    /// The target summary, if the response carried one
    pub fn full(&self) -> Option<&Target> {
        match self {
            TargetRef::Login(_) => None,
            TargetRef::Full(target) => Some(target),
        }
    }
}

impl PolymorphicField for TargetRef {
    const FIELD: &'static str = "target";
    const BARE_VARIANT: &'static str = "login";
    const RICH_VARIANT: &'static str = "full";

    type Rich = Target;

    fn from_primitive(raw: &Value) -> Result<Self, FieldError> {
        login_from_primitive(Self::FIELD, raw).map(TargetRef::Login)
    }

    fn from_rich(rich: Target) -> Self {
        TargetRef::Full(Box::new(rich))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            TargetRef::Login(_) => Self::BARE_VARIANT,
            TargetRef::Full(_) => Self::RICH_VARIANT,
        }
    }

    fn identity(&self) -> String {
        self.login().to_string()
    }
}

impl<'de> Deserialize<'de> for TargetRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_field(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use serde_json::json;

    #[test]
    fn test_bare_login() {
        let resolved: TargetRef = resolve(json!("pjhyett")).unwrap();
        assert_eq!(resolved, TargetRef::Login("pjhyett".to_string()));
        assert_eq!(resolved.variant_name(), "login");
    }

    #[test]
    fn test_full_target() {
        let resolved: TargetRef = resolve(json!({
            "login": "pjhyett",
            "followers": 1200,
            "repos": 31,
            "gravatar_id": "abc",
        }))
        .unwrap();

        assert_eq!(resolved.login(), "pjhyett");
        assert_eq!(resolved.full().and_then(|t| t.followers), Some(1200));
    }

    #[test]
    fn test_full_target_requires_login() {
        let err = resolve::<TargetRef>(json!({"followers": 3})).unwrap_err();
        assert!(err.to_string().contains("login"));
    }
}
