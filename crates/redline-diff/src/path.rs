//! Traversal path bookkeeping.
//!
//! [`PathTracker`] mirrors the position of a depth-first walk. Its depth
//! always equals the number of unmatched pushes.

pub use redline_types::PATH_SEPARATOR;
use redline_types::{Step, TypeTag};

use crate::error::{DiffError, DiffResult};

/// A stack of [`Step`]s, mutated only by push and pop.
#[derive(Clone, Debug, Default)]
pub struct PathTracker {
    steps: Vec<Step>,
}

impl PathTracker {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps on the path.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step is on the path.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Remove and return the top step.
    ///
    /// An empty path means the caller's push/pop sequence is malformed.
    pub fn pop(&mut self) -> DiffResult<Step> {
        self.steps.pop().ok_or(DiffError::EmptyPath)
    }

    /// The top step, including any values attached to it.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Step> {
        self.steps.last_mut()
    }

    /// The type tag recorded `depth_from_top` steps down, where `1` is the top.
    ///
    /// `type_at(2)` is the step that selected the aggregate directly
    /// containing the top step, so its tag is the top step's owning type.
    pub fn type_at(&self, depth_from_top: usize) -> DiffResult<&TypeTag> {
        let depth = self.steps.len();
        if depth_from_top == 0 || depth_from_top > depth {
            return Err(DiffError::DepthOutOfRange {
                requested: depth_from_top,
                depth,
            });
        }
        Ok(self.steps[depth - depth_from_top].type_tag())
    }

    /// Join the fragments of every rendered step with [`PATH_SEPARATOR`].
    /// Root and indirect steps contribute nothing.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for step in self.steps.iter().filter(|s| s.is_rendered()) {
            if !rendered.is_empty() {
                rendered.push(PATH_SEPARATOR);
            }
            rendered.push_str(&step.fragment());
        }
        rendered
    }

    /// All steps, bottom first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
