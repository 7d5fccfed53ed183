//! Type-scoped redaction rules and the registry that matches them.

use std::collections::BTreeSet;

use redline_types::{Tagged, TypeTag};

/// Fields of one owning type whose values must never be revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactionRule {
    owner: TypeTag,
    fields: BTreeSet<String>,
}

impl RedactionRule {
    pub fn new<I, S>(owner: TypeTag, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owner,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// A rule owned by `T`'s tag.
    pub fn for_type<T, I, S>(fields: I) -> Self
    where
        T: Tagged + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(T::type_tag(), fields)
    }

    pub fn owner(&self) -> &TypeTag {
        &self.owner
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Case-sensitive exact membership.
    pub fn covers(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

/// The set of redaction rules consulted while reporting.
///
/// Rules accumulate: registering the same owner twice keeps both rules and
/// a field is redacted if any of them covers it. The registry is never
/// mutated during a traversal, so one instance can be shared across
/// reporters behind an `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedactionRegistry {
    rules: Vec<RedactionRule>,
}

impl RedactionRegistry {
    /// Create an empty registry. Nothing is redacted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: RedactionRule) {
        self.rules.push(rule);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_rule(mut self, rule: RedactionRule) -> Self {
        self.register(rule);
        self
    }

    /// Returns `true` iff some rule for exactly `owner` covers `field`.
    pub fn is_redacted(&self, owner: &TypeTag, field: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.owner() == owner && rule.covers(field))
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RedactionRule> for RedactionRegistry {
    fn from_iter<I: IntoIterator<Item = RedactionRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
