//! Nested diff document built from flat dotted paths.
//!
//! Each differing leaf is inserted under the path it was reported at,
//! splitting the path on [`PATH_SEPARATOR`] and creating intermediate
//! branches on demand. Branches keep their keys in insertion order.
//!
//! # Collisions
//!
//! A well-formed traversal never reports the same path twice, nor a path
//! that is a strict prefix of another. If it does, the later insert wins
//! and the displaced node is recorded as a [`Collision`] and logged.

use indexmap::IndexMap;
use redline_types::LeafValue;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::path::PATH_SEPARATOR;

/// Key holding the left-hand value of a leaf.
pub const FROM_KEY: &str = "From:";
/// Key holding the right-hand value of a leaf.
pub const TO_KEY: &str = "To:";
/// Stands in for both values of a redacted leaf.
pub const REDACTED_PLACEHOLDER: &str = "(redacted)";

/// A terminal differing-value record.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    Revealed { from: LeafValue, to: LeafValue },
    Redacted,
}

impl Serialize for Leaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Leaf::Revealed { from, to } => {
                map.serialize_entry(FROM_KEY, from)?;
                map.serialize_entry(TO_KEY, to)?;
            }
            Leaf::Redacted => {
                map.serialize_entry(FROM_KEY, REDACTED_PLACEHOLDER)?;
                map.serialize_entry(TO_KEY, REDACTED_PLACEHOLDER)?;
            }
        }
        map.end()
    }
}

/// A node of the diff document.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffNode {
    Branch(IndexMap<String, DiffNode>),
    Leaf(Leaf),
}

impl DiffNode {
    fn empty_branch() -> Self {
        DiffNode::Branch(IndexMap::new())
    }

    pub fn as_branch(&self) -> Option<&IndexMap<String, DiffNode>> {
        match self {
            DiffNode::Branch(children) => Some(children),
            DiffNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            DiffNode::Leaf(leaf) => Some(leaf),
            DiffNode::Branch(_) => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            DiffNode::Leaf(_) => 1,
            DiffNode::Branch(children) => children.values().map(DiffNode::leaf_count).sum(),
        }
    }

    /// Turn this node into a branch if it is a leaf. Returns whether a leaf
    /// was displaced, and the branch's children.
    fn make_branch(&mut self) -> (bool, &mut IndexMap<String, DiffNode>) {
        let displaced = matches!(self, DiffNode::Leaf(_));
        if displaced {
            *self = DiffNode::empty_branch();
        }
        match self {
            DiffNode::Branch(children) => (displaced, children),
            DiffNode::Leaf(_) => unreachable!("leaf was replaced by a branch"),
        }
    }
}

impl Serialize for DiffNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DiffNode::Branch(children) => serializer.collect_map(children),
            DiffNode::Leaf(leaf) => leaf.serialize(serializer),
        }
    }
}

/// What a later insert displaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    /// The same path was reported twice.
    DuplicateLeaf,
    /// A leaf sat where a longer path needed a branch.
    LeafBecameBranch,
    /// A branch sat where a shorter path needed a leaf.
    BranchBecameLeaf,
}

/// A node displaced by a later insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    /// Path of the displaced node.
    pub path: String,
    pub kind: CollisionKind,
}

/// The accumulated diff: a root branch plus any collisions seen while building it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffTree {
    root: IndexMap<String, DiffNode>,
    collisions: Vec<Collision>,
}

impl DiffTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no difference has been recorded.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of leaves currently in the tree.
    pub fn len(&self) -> usize {
        self.root.values().map(DiffNode::leaf_count).sum()
    }

    pub fn root(&self) -> &IndexMap<String, DiffNode> {
        &self.root
    }

    /// Nodes displaced by later inserts, in the order they happened.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Insert a differing leaf at `path`.
    pub fn insert(&mut self, path: &str, from: LeafValue, to: LeafValue, redacted: bool) {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let separator = PATH_SEPARATOR.to_string();
        let collisions = &mut self.collisions;
        let mut current = &mut self.root;
        for (depth, segment) in parents.iter().enumerate() {
            let node = current
                .entry((*segment).to_string())
                .or_insert_with(DiffNode::empty_branch);
            let (displaced, children) = node.make_branch();
            if displaced {
                let displaced_path = segments[..=depth].join(separator.as_str());
                warn!(path = %displaced_path, "diff leaf displaced by a longer path");
                collisions.push(Collision {
                    path: displaced_path,
                    kind: CollisionKind::LeafBecameBranch,
                });
            }
            current = children;
        }

        let leaf = if redacted {
            Leaf::Redacted
        } else {
            Leaf::Revealed { from, to }
        };
        let kind = match current.insert((*last).to_string(), DiffNode::Leaf(leaf)) {
            None => return,
            Some(DiffNode::Leaf(_)) => CollisionKind::DuplicateLeaf,
            Some(DiffNode::Branch(_)) => CollisionKind::BranchBecameLeaf,
        };
        warn!(path, ?kind, "diff node overwritten by a later report");
        collisions.push(Collision {
            path: path.to_string(),
            kind,
        });
    }

    /// Look up the node at a dotted path.
    pub fn get(&self, path: &str) -> Option<&DiffNode> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_branch()?.get(segment)?;
        }
        Some(node)
    }
}

impl Serialize for DiffTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.root)
    }
}
