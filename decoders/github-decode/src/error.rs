//! Error types for response decoding
//!
//! Structural and enumeration failures surface to callers as a single
//! [`DecodeError`]. Failures raised deep inside a serde walk only carry a
//! message, so they are classified back into variants by the stable
//! prefixes their sources use.

use serde_json::Value;
use thiserror::Error;

use crate::raw::{preview, StructuralKind};

/// Message prefix of every structural-kind failure
pub const UNEXPECTED_KIND_PREFIX: &str = "unexpected structural kind";

/// Message prefix of every enumeration failure
pub const UNKNOWN_ENUM_PREFIX: &str = "unknown enumeration value";

/// Errors that can occur while decoding a response
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The response stream could not be read
    #[error("failed to read response stream: {0}")]
    Read(#[from] std::io::Error),

    /// The response bytes are not UTF-8
    #[error("response is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The response is not a JSON document
    #[error("malformed JSON document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// A value had a structural kind outside the expected set
    #[error("{message}")]
    UnexpectedStructuralKind {
        /// Description naming what was expected and what was found
        message: String,
        /// The offending element, when it is available
        element: Option<Value>,
    },

    /// An enumeration wire string has no domain value
    #[error("{message}")]
    UnknownEnumerationValue {
        /// Description naming the enumeration and the wire string
        message: String,
    },

    /// The document does not match the target schema
    #[error("response does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl DecodeError {
    /// Top-level value had the wrong kind
    pub(crate) fn unexpected_top_level(expected: StructuralKind, element: Value) -> Self {
        let message = format!(
            "{UNEXPECTED_KIND_PREFIX}: expected a top-level {expected}, found {}: {}",
            StructuralKind::of(&element),
            preview(&element)
        );
        DecodeError::UnexpectedStructuralKind {
            message,
            element: Some(element),
        }
    }

    /// Classify an error raised while walking a tree against a target type
    pub(crate) fn from_structural(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if message.starts_with(UNEXPECTED_KIND_PREFIX) {
            DecodeError::UnexpectedStructuralKind {
                message,
                element: crate::resolve::take_offending_element(),
            }
        } else if message.starts_with(UNKNOWN_ENUM_PREFIX) {
            DecodeError::UnknownEnumerationValue { message }
        } else {
            DecodeError::Schema(err)
        }
    }
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
