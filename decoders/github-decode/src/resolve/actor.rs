//! Member references in event payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{deserialize_field, login_from_primitive, FieldError, PolymorphicField};
use crate::schema::User;

/// A user added as a member, either by login or as a full user record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActorRef {
    /// Bare login
    Login(String),
    /// Fully expanded user
    User(Box<User>),
}

impl ActorRef {
    /// Login of the user, whichever variant was sent
    pub fn login(&self) -> &str {
        match self {
            ActorRef::Login(login) => login,
            ActorRef::User(user) => &user.login,
        }
    }

    /// The expanded user, if the response carried one
    pub fn user(&self) -> Option<&User> {
        match self {
            ActorRef::Login(_) => None,
            ActorRef::User(user) => Some(user),
        }
    }
}

impl PolymorphicField for ActorRef {
    const FIELD: &'static str = "member";
    const BARE_VARIANT: &'static str = "login";
    const RICH_VARIANT: &'static str = "user";

    type Rich = User;

    fn from_primitive(raw: &Value) -> Result<Self, FieldError> {
        login_from_primitive(Self::FIELD, raw).map(ActorRef::Login)
    }

    fn from_rich(rich: User) -> Self {
        ActorRef::User(Box::new(rich))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            ActorRef::Login(_) => Self::BARE_VARIANT,
            ActorRef::User(_) => Self::RICH_VARIANT,
        }
    }

    fn identity(&self) -> String {
        self.login().to_string()
    }
}

impl<'de> Deserialize<'de> for ActorRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_field(deserializer)
    }
}
