//! Closed wire enumerations
//!
//! Every enumeration the API sends is a canonical string. The [`wire_enum!`]
//! macro declares the enum together with its wire table, so the mapping is
//! stated once and an unrecognized string is always an error rather than a
//! silent default.
//!
//! The serde impls are generated from the same table instead of derived with
//! `#[serde(rename = ...)]`, since the rule registry needs the variant list
//! and wire strings as data.

use serde::de::{self, Deserialize, Deserializer};
use thiserror::Error;

/// A wire string with no matching domain value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown enumeration value for {type_name}: `{value}`")]
pub struct UnknownVariant {
    /// Wire name of the enumeration
    pub type_name: &'static str,
    /// The string that was received
    pub value: String,
}

/// An enumeration with a closed set of canonical wire strings
pub trait WireEnum: Copy + 'static {
    /// Human readable name used in errors and the rule registry
    const TYPE_NAME: &'static str;

    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// Canonical wire string of this variant
    fn wire(&self) -> &'static str;

    /// Look up the variant for a wire string (exact match)
    fn from_wire(value: &str) -> Result<Self, UnknownVariant> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.wire() == value)
            .ok_or_else(|| UnknownVariant {
                type_name: Self::TYPE_NAME,
                value: value.to_string(),
            })
    }
}

/// Deserialize a [`WireEnum`] from its wire string
pub fn deserialize_wire<'de, D, E>(deserializer: D) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: WireEnum,
{
    let value = String::deserialize(deserializer)?;
    E::from_wire(&value).map_err(de::Error::custom)
}

/// Declare a closed wire enumeration
///
/// ```rust,ignore
/// wire_enum! {
///     /// State of an issue
///     pub enum IssueState as "issue state" {
///         Open => "open",
///         Closed => "closed",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn wire(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::WireEnum::wire(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::enums::WireEnum>::from_wire(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::enums::WireEnum::wire(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::enums::deserialize_wire(deserializer)
            }
        }
    };
}

pub(crate) use wire_enum;
