//! Response decoding layer for the GitHub v2 JSON API
//!
//! Decodes response bodies into typed entities: issues, pull requests,
//! repositories, gists, organizations, feeds and the rest of the v2 schema.
//! Fields that arrive in more than one shape are resolved by their
//! structural kind, dates go through a fixed fallback chain, and
//! enumerations are checked against their registered wire strings.

pub mod cli;
pub mod dates;
pub mod decoder;
pub mod enums;
pub mod error;
pub mod naming;
pub mod observer;
pub mod raw;
pub mod registry;
pub mod resolve;
pub mod schema;

pub use dates::{parse_date, DateValue};
pub use decoder::{unmarshal, Decoder};
pub use error::{DecodeError, DecodeResult};
pub use naming::FieldNamingPolicy;
pub use observer::{DecodeObserver, ObserverRegistry};
pub use raw::{RawArray, RawObject, RawValue, StructuralKind};
pub use registry::registry;
pub use resolve::{ActorRef, PullRequestRef, TargetRef};
pub use schema::SchemaEntity;
