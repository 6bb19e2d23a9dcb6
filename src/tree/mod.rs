// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backward predecessor trees.
//!
//! A [`BackwardTree`] stores every triple that could have led, through the
//! recurrence, to a given terminal triple. Nodes live in an arena and are
//! addressed by [`NodeId`]; a node owns the ids of its children and there
//! are no back-links, so the structure is acyclic by construction.
//!
//! # Shape
//!
//! ```text
//!   (a0,0,0) -> (a1,0,0) -> ... -> (c0,c1,c2) -> predecessors -> ...
//!   \______ forward prefix ______/  \____ branching backward tree ____/
//! ```
//!
//! The root is the earliest forward term. Forward-prefix nodes wrap a single
//! value as `(v, 0, 0)` and have exactly one child; the last of them leads to
//! the branching root, the terminal triple itself. When no forward terms are
//! supplied the root and the branching root coincide.
//!
//! # Modules
//!
//! - `builder`: level-by-level predecessor enumeration
//! - `paths`: enumeration of every leaf-to-root path

pub mod builder;
pub mod paths;

pub use builder::{build_tree, build_tree_from_forward, predecessors, TreeBuilder};
pub use paths::{enumerate_paths, PathSet};

use crate::error::{MmmError, Result};
use crate::model::Triple;
use crate::statistics::Statistics;
use serde::Serialize;
use std::fmt;

/// Index of a node in a [`BackwardTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a node belongs to the forward prefix or the branching part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// Synthetic `(v, 0, 0)` wrapper for a term of the forward path.
    Forward,
    /// A triple of the backward predecessor tree.
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    triple: Triple,
    kind: NodeKind,
    children: Vec<NodeId>,
}

impl Node {
    pub fn triple(&self) -> Triple {
        self.triple
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Child ids, ordered by first component descending for built trees.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed tree of predecessor triples.
#[derive(Debug, Clone, Default)]
pub struct BackwardTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    branching_root: Option<NodeId>,
    statistics: Statistics,
}

impl BackwardTree {
    /// An empty tree. Traversals on it fail with `EmptyTree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree holding only the branching root.
    pub fn with_root(triple: Triple) -> Self {
        let mut tree = Self::new();
        let id = tree.push(triple, NodeKind::Backward);
        tree.root = Some(id);
        tree.branching_root = Some(id);
        tree
    }

    /// Attach `triple` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// `NullNode` if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId, triple: Triple) -> Result<NodeId> {
        self.get(parent)?;
        let id = self.push(triple, NodeKind::Backward);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Prepend the forward path `terms` above the current root.
    ///
    /// After the call the root wraps `terms[0]`, and following single
    /// children visits every term in order before reaching the old root.
    pub fn prepend_forward(&mut self, terms: &[i64]) -> Result<()> {
        let mut below = self.root.ok_or(MmmError::EmptyTree)?;
        for &value in terms.iter().rev() {
            let id = self.push(Triple::wrapper(value), NodeKind::Forward);
            self.nodes[id.0].children.push(below);
            below = id;
        }
        self.root = Some(below);
        Ok(())
    }

    fn push(&mut self, triple: Triple, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            triple,
            kind,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn set_statistics(&mut self, statistics: Statistics) {
        self.statistics = statistics;
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// `NullNode` if `id` is not in this tree.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(MmmError::NullNode { id })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The earliest forward term, or the branching root without a prefix.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The terminal triple, where predecessor enumeration starts.
    pub fn branching_root(&self) -> Option<NodeId> {
        self.branching_root
    }

    /// Number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Nodes reachable from `id`, `id` included.
    pub fn count_from(&self, id: NodeId) -> Result<usize> {
        self.get(id)?;
        Ok(DepthFirst::starting_at(self, id).count())
    }

    /// Pre-order walk from the root, children in stored order.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        match self.root {
            Some(root) => DepthFirst::starting_at(self, root),
            None => DepthFirst {
                tree: self,
                stack: Vec::new(),
            },
        }
    }

    /// The triples of the branching part, level by level below the branching root.
    pub fn levels(&self) -> Result<Vec<Vec<Triple>>> {
        let start = self.branching_root.ok_or(MmmError::EmptyTree)?;
        let mut levels = Vec::new();
        let mut current = vec![start];
        while !current.is_empty() {
            let mut next = Vec::new();
            let mut level = Vec::with_capacity(current.len());
            for id in current {
                let node = self.get(id)?;
                level.push(node.triple);
                next.extend_from_slice(&node.children);
            }
            levels.push(level);
            current = next;
        }
        Ok(levels)
    }
}

/// Total nodes in the tree, forward prefix included; 0 for an empty tree.
pub fn count_nodes(tree: &BackwardTree) -> usize {
    tree.depth_first().count()
}

/// One step of a depth-first walk, as seen by a graph renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeVisit {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub depth: usize,
    pub triple: Triple,
    pub kind: NodeKind,
}

/// Iterator returned by [`BackwardTree::depth_first`].
#[derive(Debug)]
pub struct DepthFirst<'a> {
    tree: &'a BackwardTree,
    /// (node, parent, depth)
    stack: Vec<(NodeId, Option<NodeId>, usize)>,
}

impl<'a> DepthFirst<'a> {
    fn starting_at(tree: &'a BackwardTree, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![(start, None, 0)],
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeVisit;

    fn next(&mut self) -> Option<NodeVisit> {
        let (id, parent, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        for &child in node.children.iter().rev() {
            self.stack.push((child, Some(id), depth + 1));
        }
        Some(NodeVisit {
            id,
            parent,
            depth,
            triple: node.triple,
            kind: node.kind,
        })
    }
}

/// Nested, serializable copy of a tree for external renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeExport {
    pub triple: Triple,
    pub kind: NodeKind,
    pub children: Vec<TreeExport>,
}

impl TreeExport {
    pub fn from_tree(tree: &BackwardTree) -> Result<Self> {
        let root = tree.root.ok_or(MmmError::EmptyTree)?;
        let order: Vec<NodeId> = tree.depth_first().map(|visit| visit.id).collect();
        let mut built: Vec<Option<TreeExport>> = vec![None; tree.len()];
        // Reverse pre-order finishes every child before its parent.
        for &id in order.iter().rev() {
            let node = tree.get(id)?;
            let children = node
                .children
                .iter()
                .map(|child| built[child.0].take().ok_or(MmmError::NullNode { id: *child }))
                .collect::<Result<Vec<_>>>()?;
            built[id.0] = Some(TreeExport {
                triple: node.triple,
                kind: node.kind,
                children,
            });
        }
        built[root.0].take().ok_or(MmmError::NullNode { id: root })
    }
}
