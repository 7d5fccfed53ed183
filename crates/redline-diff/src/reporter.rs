//! The diff reporter: a [`Visitor`] that records only differing leaves.

use std::fmt;
use std::sync::Arc;

use redline_types::{Comparison, Step, Visitor};
use tracing::{debug, error};

use crate::error::{DiffError, DiffResult};
use crate::path::PathTracker;
use crate::redaction::RedactionRegistry;
use crate::tree::DiffTree;

/// Accumulates the differing leaves of one traversal into a [`DiffTree`].
///
/// A reporter is a pure state machine over the push/report/pop sequence
/// and must be driven by a single traversal at a time. The redaction
/// registry is shared and never mutated.
#[derive(Clone, Debug)]
pub struct DiffReporter {
    path: PathTracker,
    tree: DiffTree,
    redactions: Arc<RedactionRegistry>,
}

impl DiffReporter {
    pub fn new(redactions: impl Into<Arc<RedactionRegistry>>) -> Self {
        Self {
            path: PathTracker::new(),
            tree: DiffTree::new(),
            redactions: redactions.into(),
        }
    }

    /// A reporter that redacts nothing.
    pub fn unredacted() -> Self {
        Self::new(RedactionRegistry::new())
    }

    pub fn tree(&self) -> &DiffTree {
        &self.tree
    }

    pub fn into_tree(self) -> DiffTree {
        self.tree
    }

    /// Current traversal depth.
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Returns `true` if no difference has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn redactions(&self) -> &RedactionRegistry {
        &self.redactions
    }

    /// Render the diff as pretty-printed JSON with 2-space indentation.
    pub fn try_serialize(&self) -> DiffResult<String> {
        serde_json::to_string_pretty(&self.tree).map_err(|e| DiffError::Serialization(e.to_string()))
    }

    /// Render the diff, or a description of why it could not be rendered.
    pub fn serialize(&self) -> String {
        self.try_serialize().unwrap_or_else(|e| e.to_string())
    }

    /// Match the innermost named step against its owner. Indirect steps
    /// (optional payloads) add no level of ownership, so they are skipped
    /// both above the field and between the field and its owner.
    fn is_redacted(&self) -> bool {
        let steps = self.path.steps();
        let indirect_on_top = steps.iter().rev().take_while(|s| s.is_indirect()).count();
        let Some(field) = steps.iter().rev().nth(indirect_on_top) else {
            return false;
        };
        // A leaf directly under the root has no owning aggregate.
        let Ok(owner) = self.path.type_at(indirect_on_top + 2) else {
            return false;
        };
        self.redactions.is_redacted(owner, &field.field_name())
    }
}

impl Default for DiffReporter {
    fn default() -> Self {
        Self::unredacted()
    }
}

impl Visitor for DiffReporter {
    fn push_step(&mut self, step: Step) {
        self.path.push(step);
    }

    fn report(&mut self, comparison: Comparison) {
        if comparison.equal {
            return;
        }
        let Comparison { from, to, .. } = comparison;
        let Some(top) = self.path.last_mut() else {
            protocol_violation(DiffError::NoActiveStep);
        };
        top.attach(from.clone(), to.clone());

        let path = self.path.render();
        let redacted = self.is_redacted();
        debug!(%path, redacted, "recording difference");
        self.tree.insert(&path, from, to, redacted);
    }

    fn pop_step(&mut self) {
        if let Err(err) = self.path.pop() {
            protocol_violation(err);
        }
    }
}

impl fmt::Display for DiffReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn protocol_violation(err: DiffError) -> ! {
    error!(%err, "visitor protocol violated");
    panic!("visitor protocol violated: {err}");
}
