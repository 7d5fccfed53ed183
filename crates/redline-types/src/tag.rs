use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Stable identity of a structural type.
///
/// A `TypeTag` is fixed when the type is defined (see [`Tagged`]) and is
/// compared by exact string equality. There is no subtype or
/// interface-based matching: `Vehicle` and `[]Vehicle` are unrelated tags.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// A tag backed by a static name. Intended for [`Tagged`] impls.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Build a tag from an owned name, rejecting empty or whitespace-bearing names.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::EmptyTag);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TypeError::WhitespaceInTag(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Tag of a sequence whose elements carry `element`.
    pub fn sequence_of(element: &TypeTag) -> Self {
        Self(Cow::Owned(format!("[]{}", element.0)))
    }

    /// Tag of a string-keyed map whose values carry `value`.
    pub fn map_of(value: &TypeTag) -> Self {
        Self(Cow::Owned(format!("map[string]{}", value.0)))
    }

    /// Tag of an optional value whose payload carries `inner`.
    pub fn optional_of(inner: &TypeTag) -> Self {
        Self(Cow::Owned(format!("*{}", inner.0)))
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeTag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeTag {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.0.into_owned()
    }
}

/// A type with a stable [`TypeTag`] established at definition time.
pub trait Tagged {
    fn type_tag() -> TypeTag;
}

macro_rules! tagged_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Tagged for $ty {
                fn type_tag() -> TypeTag {
                    TypeTag::from_static($name)
                }
            }
        )*
    };
}

tagged_primitive! {
    String => "string",
    str => "string",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
}

impl<T: Tagged> Tagged for Vec<T> {
    fn type_tag() -> TypeTag {
        TypeTag::sequence_of(&T::type_tag())
    }
}

impl<T: Tagged> Tagged for Option<T> {
    fn type_tag() -> TypeTag {
        TypeTag::optional_of(&T::type_tag())
    }
}

impl<T: Tagged> Tagged for BTreeMap<String, T> {
    fn type_tag() -> TypeTag {
        TypeTag::map_of(&T::type_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_tags_compare_equal() {
        let a = TypeTag::from_static("LicensePlate");
        let b = TypeTag::new("LicensePlate").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_ne!(
            TypeTag::from_static("Vehicle"),
            TypeTag::from_static("vehicle")
        );
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(TypeTag::new(""), Err(TypeError::EmptyTag));
        assert!(matches!(
            TypeTag::new("License Plate"),
            Err(TypeError::WhitespaceInTag(_))
        ));
    }

    #[test]
    fn composite_tags() {
        assert_eq!(Vec::<String>::type_tag().as_str(), "[]string");
        assert_eq!(Option::<i8>::type_tag().as_str(), "*i8");
        assert_eq!(BTreeMap::<String, u32>::type_tag().as_str(), "map[string]u32");
        assert_eq!(Vec::<Vec<bool>>::type_tag().as_str(), "[][]bool");
    }

    #[test]
    fn serde_uses_plain_string() {
        let tag = TypeTag::from_static("Driver");
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"Driver\"");
        let back: TypeTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn serde_rejects_empty_tag() {
        let result: Result<TypeTag, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_and_debug() {
        let tag = TypeTag::from_static("Vehicle");
        assert_eq!(tag.to_string(), "Vehicle");
        assert_eq!(format!("{tag:?}"), "TypeTag(Vehicle)");
    }
}
