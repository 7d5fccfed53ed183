//! Shared vocabulary for redline.
//!
//! This crate defines the types that flow between a traversal engine and
//! the diff reporter. Every other redline crate depends on `redline-types`.
//!
//! # Key Types
//!
//! - [`TypeTag`] / [`Tagged`] — Stable structural-type identity used for redaction matching
//! - [`Step`] / [`StepKind`] — One position in a depth-first traversal path
//! - [`LeafValue`] — An encoded leaf value that defers encoding failures
//! - [`Comparison`] — The equality verdict for one pair of leaves
//! - [`Visitor`] — The push/report/pop protocol a traversal engine drives

pub mod error;
pub mod step;
pub mod tag;
pub mod value;
pub mod visitor;

pub use error::TypeError;
pub use step::{Step, StepKind, PATH_SEPARATOR};
pub use tag::{Tagged, TypeTag};
pub use value::{Comparison, LeafValue};
pub use visitor::{NoopVisitor, Visitor};
