//! Polymorphic field resolution
//!
//! The API evolved unevenly: compact responses send a bare identifier where
//! expanded responses send the full sub-object for the same field. No type
//! discriminator is reliably present, so the variant is chosen by the
//! structural kind of the value alone:
//!
//! | kind                         | variant                         |
//! |------------------------------|---------------------------------|
//! | boolean / number / string    | bare identifier                 |
//! | object                       | rich variant, decoded fully     |
//! | null / array                 | [`FieldError::UnexpectedKind`]  |
//!
//! The match over [`StructuralKind`] is exhaustive, so a new kind cannot
//! slip through unhandled.

pub mod actor;
pub mod pull_request;
pub mod target;

pub use actor::ActorRef;
pub use pull_request::PullRequestRef;
pub use target::TargetRef;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;
use std::cell::RefCell;
use thiserror::Error;

use crate::raw::{preview, StructuralKind};

/// Errors produced while resolving a single polymorphic field
#[derive(Error, Debug)]
pub enum FieldError {
    /// The value is neither a primitive nor an object
    #[error(
        "unexpected structural kind for `{field}`: expected a primitive or an object, found {kind}: {}",
        preview(.element)
    )]
    UnexpectedKind {
        field: &'static str,
        kind: StructuralKind,
        element: Value,
    },

    /// The primitive cannot serve as an identifier for this field
    #[error("invalid {expected} for `{field}`: {element}")]
    InvalidIdentifier {
        field: &'static str,
        expected: &'static str,
        element: String,
    },

    /// The rich variant failed to decode; the inner message is kept verbatim
    /// so nested failures keep their classification
    #[error(transparent)]
    Rich(#[from] serde_json::Error),
}

/// A field whose wire value is one of a closed set of shapes
///
/// Every implementor exposes the same capability surface, so consumers can
/// read the identifying value without branching on the variant.
pub trait PolymorphicField: Sized {
    /// Wire name of the field
    const FIELD: &'static str;

    /// Name of the bare-identifier variant
    const BARE_VARIANT: &'static str;

    /// Name of the rich variant
    const RICH_VARIANT: &'static str;

    /// Structured payload of the rich variant
    type Rich: DeserializeOwned;

    /// Build the bare-identifier variant from a primitive
    fn from_primitive(raw: &Value) -> Result<Self, FieldError>;

    /// Wrap a decoded rich payload
    fn from_rich(rich: Self::Rich) -> Self;

    /// Name of the variant that was selected
    fn variant_name(&self) -> &'static str;

    /// Identifying login or number, whichever the field carries
    fn identity(&self) -> String;
}

/// Resolve the variant of `F` for a raw value
pub fn resolve<F: PolymorphicField>(raw: Value) -> Result<F, FieldError> {
    match StructuralKind::of(&raw) {
        StructuralKind::Bool | StructuralKind::Number | StructuralKind::String => {
            F::from_primitive(&raw)
        }
        StructuralKind::Object => {
            let rich = serde_json::from_value(raw)?;
            Ok(F::from_rich(rich))
        }
        kind @ (StructuralKind::Null | StructuralKind::Array) => Err(FieldError::UnexpectedKind {
            field: F::FIELD,
            kind,
            element: raw,
        }),
    }
}

thread_local! {
    /// Value behind the last kind failure raised through serde on this thread
    static OFFENDING_ELEMENT: RefCell<Option<Value>> = const { RefCell::new(None) };
}

/// Forget any value left over from an earlier walk
pub(crate) fn clear_offending_element() {
    OFFENDING_ELEMENT.with(|slot| slot.borrow_mut().take());
}

/// Take the value behind the last kind failure, if one was recorded
///
/// Serde errors only carry a message, so the full value travels beside it.
pub(crate) fn take_offending_element() -> Option<Value> {
    OFFENDING_ELEMENT.with(|slot| slot.borrow_mut().take())
}

/// Serde entry point shared by every polymorphic field
pub(crate) fn deserialize_field<'de, D, F>(deserializer: D) -> Result<F, D::Error>
where
    D: Deserializer<'de>,
    F: PolymorphicField,
{
    let raw = Value::deserialize(deserializer)?;
    resolve(raw).map_err(|err| {
        if let FieldError::UnexpectedKind { element, .. } = &err {
            OFFENDING_ELEMENT.with(|slot| *slot.borrow_mut() = Some(element.clone()));
        }
        de::Error::custom(err)
    })
}

/// Login carried by a bare primitive
///
/// Strings are taken verbatim and numbers by their decimal text. Booleans
/// never name a user.
pub(crate) fn login_from_primitive(field: &'static str, raw: &Value) -> Result<String, FieldError> {
    match raw {
        Value::String(login) => Ok(login.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(FieldError::InvalidIdentifier {
            field,
            expected: "login",
            element: preview(raw),
        }),
    }
}
