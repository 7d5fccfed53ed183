//! Lockstep structural traversal.
//!
//! Walks two values of the same [`Structural`] type side by side and drives
//! a [`Visitor`] with one push/pop per step and one report per leaf. The
//! engine decides leaf equality; observers such as a diff reporter only
//! record what it tells them.
//!
//! Struct types opt in with the [`structural!`] macro or a hand-written
//! impl built on [`walk_field`].

pub mod engine;
mod impls;

pub use engine::{compare, equal, walk_field, Structural};
pub use redline_types::{Comparison, LeafValue, Step, Tagged, TypeTag, Visitor};
