//! The callback protocol between a traversal engine and its observer.

use crate::step::Step;
use crate::value::Comparison;

/// Observer of a lockstep depth-first walk over two values.
///
/// The engine calls [`push_step`](Visitor::push_step) when it descends,
/// [`report`](Visitor::report) at every leaf, and
/// [`pop_step`](Visitor::pop_step) when it ascends. Calls are strictly
/// well-nested: every push is matched by exactly one pop, and reports only
/// happen while at least one step is pushed.
pub trait Visitor {
    fn push_step(&mut self, step: Step);

    fn report(&mut self, comparison: Comparison);

    fn pop_step(&mut self);
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn push_step(&mut self, step: Step) {
        (**self).push_step(step);
    }

    fn report(&mut self, comparison: Comparison) {
        (**self).report(comparison);
    }

    fn pop_step(&mut self) {
        (**self).pop_step();
    }
}

/// A visitor that ignores every callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisitor;

impl Visitor for NoopVisitor {
    fn push_step(&mut self, _step: Step) {}

    fn report(&mut self, _comparison: Comparison) {}

    fn pop_step(&mut self) {}
}
