//! Structural diff reporter.
//!
//! A [`DiffReporter`] observes a lockstep traversal of two values through the
//! [`Visitor`](redline_types::Visitor) protocol and keeps only the leaves that
//! differ, arranged into a nested document keyed by path segment. Fields
//! declared in a [`RedactionRegistry`] are recorded with a fixed placeholder
//! instead of their values.
//!
//! # Key Types
//!
//! - [`PathTracker`] -- Stack of traversal steps mirroring the current position
//! - [`RedactionRule`] / [`RedactionRegistry`] -- Type-scoped field redaction
//! - [`DiffTree`] / [`DiffNode`] / [`Leaf`] -- Incrementally built nested diff
//! - [`DiffReporter`] -- Visitor that ties the three together
//! - [`RedactionConfig`] -- Redaction rules loaded from TOML

pub mod config;
pub mod error;
pub mod path;
pub mod redaction;
pub mod reporter;
pub mod tree;

pub use config::{RedactionConfig, RuleConfig};
pub use error::{DiffError, DiffResult};
pub use path::{PathTracker, PATH_SEPARATOR};
pub use redaction::{RedactionRegistry, RedactionRule};
pub use reporter::DiffReporter;
pub use tree::{
    Collision, CollisionKind, DiffNode, DiffTree, Leaf, FROM_KEY, REDACTED_PLACEHOLDER, TO_KEY,
};
