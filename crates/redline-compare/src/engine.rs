use redline_types::{Comparison, NoopVisitor, Step, Tagged, Visitor};
use serde::Serialize;
use tracing::debug;

/// A type that can be walked in lockstep with another value of itself.
///
/// Leaves report exactly one [`Comparison`]. Aggregates push a step for
/// each child, walk it, and pop the step again.
pub trait Structural: Tagged + PartialEq + Serialize {
    fn walk(&self, other: &Self, visitor: &mut dyn Visitor);
}

/// Walk one named field of a struct-like aggregate.
pub fn walk_field<T: Structural>(visitor: &mut dyn Visitor, name: &str, from: &T, to: &T) {
    visitor.push_step(Step::field(name, T::type_tag()));
    from.walk(to, visitor);
    visitor.pop_step();
}

/// Compare `from` and `to`, driving `visitor` through the whole walk.
///
/// Returns `true` if every leaf compared equal.
pub fn compare<T, V>(from: &T, to: &T, visitor: &mut V) -> bool
where
    T: Structural,
    V: Visitor + ?Sized,
{
    let root = T::type_tag();
    let mut tracking = Tracking {
        inner: visitor,
        differences: 0,
    };
    tracking.push_step(Step::root(root.clone()));
    from.walk(to, &mut tracking);
    tracking.pop_step();

    debug!(%root, differences = tracking.differences, "comparison finished");
    tracking.differences == 0
}

/// Returns `true` if `from` and `to` are equal at every leaf.
pub fn equal<T: Structural>(from: &T, to: &T) -> bool {
    compare(from, to, &mut NoopVisitor)
}

/// Forwards every callback and counts unequal leaves.
struct Tracking<'a, V: Visitor + ?Sized> {
    inner: &'a mut V,
    differences: usize,
}

impl<V: Visitor + ?Sized> Visitor for Tracking<'_, V> {
    fn push_step(&mut self, step: Step) {
        self.inner.push_step(step);
    }

    fn report(&mut self, comparison: Comparison) {
        if !comparison.equal {
            self.differences += 1;
        }
        self.inner.report(comparison);
    }

    fn pop_step(&mut self) {
        self.inner.pop_step();
    }
}

/// Implement [`Tagged`] and [`Structural`] for a struct by listing its
/// fields and the names they render as.
///
/// ```ignore
/// structural!(Vehicle as "Vehicle" {
///     make => "Make",
///     model => "Model",
/// });
/// ```
#[macro_export]
macro_rules! structural {
    ($ty:ty as $tag:literal { $($field:ident => $name:literal),* $(,)? }) => {
        impl $crate::Tagged for $ty {
            fn type_tag() -> $crate::TypeTag {
                $crate::TypeTag::from_static($tag)
            }
        }

        impl $crate::Structural for $ty {
            fn walk(&self, other: &Self, visitor: &mut dyn $crate::Visitor) {
                $( $crate::walk_field(visitor, $name, &self.$field, &other.$field); )*
            }
        }
    };
}
