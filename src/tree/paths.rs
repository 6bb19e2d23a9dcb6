// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Every predecessor path of a backward tree.
//!
//! A path runs from a leaf (the earliest triple) to the branching root, so
//! reading it left to right follows the recurrence forward. Forward-prefix
//! nodes are skipped: enumeration always starts at the branching root.
//!
//! Paths have different lengths; the collection is made rectangular by
//! left-padding shorter paths with `None`.

use crate::error::{MmmError, Result};
use crate::model::Triple;
use crate::tree::{BackwardTree, NodeId};

/// Rectangular set of leaf-to-root paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    width: usize,
    paths: Vec<Vec<Option<Triple>>>,
}

impl PathSet {
    fn from_ragged(ragged: Vec<Vec<Triple>>) -> Self {
        let width = ragged.iter().map(Vec::len).max().unwrap_or(0);
        let paths = ragged
            .into_iter()
            .map(|path| {
                let mut padded = vec![None; width - path.len()];
                padded.extend(path.into_iter().map(Some));
                padded
            })
            .collect();
        Self { width, paths }
    }

    /// Length of every padded path: the longest path's triple count.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[Vec<Option<Triple>>] {
        &self.paths
    }

    /// The path at `index` without its padding.
    pub fn unpadded(&self, index: usize) -> Option<Vec<Triple>> {
        self.paths
            .get(index)
            .map(|path| path.iter().flatten().copied().collect())
    }

    /// Each path spelled as the integer sequence it walks through.
    ///
    /// Consecutive triples on a path overlap in two values, so a path of `k`
    /// triples spells `k + 2` terms: the first triple in full, then the last
    /// value of each following triple. Results are left-padded with `None`
    /// to a common length, ready for [`crate::labeling::label_all`].
    pub fn term_sequences(&self) -> Vec<Vec<Option<i64>>> {
        let spelled: Vec<Vec<i64>> = self
            .paths
            .iter()
            .map(|path| {
                let mut triples = path.iter().flatten();
                let mut terms = Vec::with_capacity(path.len() + 2);
                if let Some(first) = triples.next() {
                    terms.extend_from_slice(&first.values());
                }
                terms.extend(triples.map(|t| t.last()));
                terms
            })
            .collect();
        let width = spelled.iter().map(Vec::len).max().unwrap_or(0);
        spelled
            .into_iter()
            .map(|terms| {
                let mut padded = vec![None; width - terms.len()];
                padded.extend(terms.into_iter().map(Some));
                padded
            })
            .collect()
    }
}

/// Enumerate every leaf-to-root path below the branching root.
///
/// A leaf contributes the single path `[leaf]`; an inner node contributes
/// `child_path + [node]` for each child, in child order.
///
/// # Errors
///
/// - `EmptyTree` if the tree has no branching root.
/// - `NullNode` if a child id does not resolve.
pub fn enumerate_paths(tree: &BackwardTree) -> Result<PathSet> {
    let start = tree.branching_root().ok_or(MmmError::EmptyTree)?;

    let mut ragged = Vec::new();
    // The chain from the branching root down to the node being visited.
    let mut chain: Vec<Triple> = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

    while let Some((id, depth)) = stack.pop() {
        let node = tree.get(id)?;
        chain.truncate(depth);
        chain.push(node.triple());
        if node.is_leaf() {
            ragged.push(chain.iter().rev().copied().collect());
        } else {
            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    Ok(PathSet::from_ragged(ragged))
}
