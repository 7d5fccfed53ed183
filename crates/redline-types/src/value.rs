//! Leaf values and equality verdicts.
//!
//! A [`LeafValue`] is encoded eagerly into a [`serde_json::Value`] so that a
//! report can hold values of any leaf type side by side. Encoding never
//! fails at construction time: a value the encoder rejects is kept as a
//! failure and only surfaces when the report is serialized.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::TypeError;

/// One side of a differing leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafValue {
    repr: Result<Value, TypeError>,
}

impl LeafValue {
    /// Encode any serializable value.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Self {
        let repr = serde_json::to_value(value).map_err(|e| TypeError::Encoding(e.to_string()));
        Self { repr }
    }

    /// The value for a side that has no counterpart (e.g. an extra sequence element).
    pub fn absent() -> Self {
        Self {
            repr: Ok(Value::Null),
        }
    }

    /// A leaf whose encoding failed with the given message.
    pub fn unencodable(reason: impl Into<String>) -> Self {
        Self {
            repr: Err(TypeError::Encoding(reason.into())),
        }
    }

    /// The encoded value, or `None` if encoding failed.
    pub fn as_json(&self) -> Option<&Value> {
        self.repr.as_ref().ok()
    }

    /// Returns `true` if this value can be rendered.
    pub fn is_encodable(&self) -> bool {
        self.repr.is_ok()
    }
}

impl From<Value> for LeafValue {
    fn from(value: Value) -> Self {
        Self { repr: Ok(value) }
    }
}

impl Serialize for LeafValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.repr {
            Ok(value) => value.serialize(serializer),
            Err(err) => Err(S::Error::custom(err)),
        }
    }
}

/// The verdict a traversal engine reports for one pair of leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub equal: bool,
    pub from: LeafValue,
    pub to: LeafValue,
}

impl Comparison {
    /// Compare two leaves with `PartialEq` and encode both sides.
    pub fn of<T: PartialEq + Serialize + ?Sized>(from: &T, to: &T) -> Self {
        Self {
            equal: from == to,
            from: LeafValue::encode(from),
            to: LeafValue::encode(to),
        }
    }

    /// A verdict for a leaf present on only one side. Never equal.
    pub fn one_sided(from: LeafValue, to: LeafValue) -> Self {
        Self {
            equal: false,
            from,
            to,
        }
    }
}
