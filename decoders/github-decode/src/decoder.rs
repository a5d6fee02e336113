//! Decoder front-end
//!
//! Turns a response stream into either a typed object graph or a raw tree.
//! Every operation reads the whole stream as UTF-8, parses it into a generic
//! JSON tree, checks the top-level structural kind and only then walks the
//! tree against the target type.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_decode::{Decoder, schema::UserFeed};
//!
//! let decoder = Decoder::new();
//! decoder.register_observer(|entities: &[&dyn SchemaEntity]| -> anyhow::Result<()> {
//!     println!("decoded {} entities", entities.len());
//!     Ok(())
//! });
//!
//! let feed: Vec<UserFeed> = decoder.decode_list(response_body)?;
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;
use tracing::{debug, instrument};

use crate::error::{DecodeError, DecodeResult};
use crate::observer::{DecodeObserver, ObserverRegistry};
use crate::raw::{RawArray, RawObject, StructuralKind};
use crate::resolve;
use crate::schema::SchemaEntity;

/// Decoder front-end owning the observer list
#[derive(Debug, Default)]
pub struct Decoder {
    observers: ObserverRegistry,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for bulk decodes
    pub fn register_observer(&self, observer: impl DecodeObserver + 'static) {
        self.observers.register(observer);
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Decode a single object graph
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stream cannot be read or is not UTF-8
    /// - The document is not JSON
    /// - The top-level value is not an object
    /// - The object does not match `T`
    #[instrument(level = "debug", skip_all, fields(decode_type = std::any::type_name::<T>()))]
    pub fn decode<T, R>(&self, stream: R) -> DecodeResult<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let tree = read_tree(stream)?;
        let object = expect_kind(tree, StructuralKind::Object)?;
        unmarshal(object)
    }

    /// Decode a sequence of entities and notify observers
    ///
    /// Observers only run when the whole sequence decoded; their failures
    /// are logged and never reach the caller.
    #[instrument(level = "debug", skip_all, fields(decode_type = std::any::type_name::<T>()))]
    pub fn decode_list<T, R>(&self, stream: R) -> DecodeResult<Vec<T>>
    where
        T: DeserializeOwned + SchemaEntity,
        R: Read,
    {
        let tree = read_tree(stream)?;
        let array = expect_kind(tree, StructuralKind::Array)?;
        let entities: Vec<T> = unmarshal(array)?;

        let view: Vec<&dyn SchemaEntity> = entities
            .iter()
            .map(|entity| entity as &dyn SchemaEntity)
            .collect();
        let failures = self.observers.notify(&view);
        debug!(count = entities.len(), failures, "bulk decode complete");

        Ok(entities)
    }

    /// Decode a raw mapping without a target schema
    #[instrument(level = "debug", skip_all)]
    pub fn decode_raw_object<R: Read>(&self, stream: R) -> DecodeResult<RawObject> {
        match read_tree(stream)? {
            Value::Object(object) => Ok(object),
            other => Err(DecodeError::unexpected_top_level(StructuralKind::Object, other)),
        }
    }

    /// Decode a raw sequence without a target schema
    #[instrument(level = "debug", skip_all)]
    pub fn decode_raw_array<R: Read>(&self, stream: R) -> DecodeResult<RawArray> {
        match read_tree(stream)? {
            Value::Array(array) => Ok(array),
            other => Err(DecodeError::unexpected_top_level(StructuralKind::Array, other)),
        }
    }
}

/// Walk an already parsed tree against `T`
pub fn unmarshal<T: DeserializeOwned>(tree: Value) -> DecodeResult<T> {
    resolve::clear_offending_element();
    serde_json::from_value(tree).map_err(DecodeError::from_structural)
}

/// Read the whole stream and parse it into a tree
///
/// The stream is consumed and dropped before anything is parsed, so it is
/// released on every path out of here.
fn read_tree<R: Read>(mut stream: R) -> DecodeResult<Value> {
    let mut bytes = Vec::new();
    let read = stream.read_to_end(&mut bytes);
    drop(stream);
    read?;

    let text = String::from_utf8(bytes)?;
    let tree: Value = serde_json::from_str(&text).map_err(DecodeError::MalformedDocument)?;
    debug!(bytes = text.len(), kind = %StructuralKind::of(&tree), "parsed response document");
    Ok(tree)
}

fn expect_kind(tree: Value, expected: StructuralKind) -> DecodeResult<Value> {
    if StructuralKind::of(&tree) == expected {
        Ok(tree)
    } else {
        Err(DecodeError::unexpected_top_level(expected, tree))
    }
}
