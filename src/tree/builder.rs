// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Level-by-level enumeration of predecessor triples.
//!
//! # Backward step
//!
//! For a triple `(c0, c1, c2)` every predecessor has the form `(x, c0, c1)`
//! with `max(x, c0, c1) - min(x, c0, c1) == c2`. Writing `mx`/`mn` for the
//! larger/smaller of `c0, c1`:
//!
//! - `x > mx` forces `x = mn + c2`
//! - `x < mn` forces `x = mx - c2`
//! - `mn <= x <= mx` works for every such `x` when `mx - mn == c2`
//!
//! so a triple with `|c0 - c1| > c2` is rigid (no predecessor), the
//! degenerate case `mx - c2 == mn` admits the whole range `mn..=mx`, and
//! otherwise there are exactly two candidates.
//!
//! # Expansion order
//!
//! The builder keeps an explicit frontier of `(node, remaining depth)`
//! entries and drains it breadth first, so memory is bounded by the node
//! budget rather than by call-stack depth.
//!
//! # Example
//!
//! ```
//! use mmm_sequence::model::Triple;
//! use mmm_sequence::tree::{build_tree, count_nodes};
//!
//! let tree = build_tree(Triple::new(3, 5, 4), 1, false).unwrap();
//! let root = tree.get(tree.branching_root().unwrap()).unwrap();
//! let firsts: Vec<i64> = root
//!     .children()
//!     .iter()
//!     .map(|&id| tree.get(id).unwrap().triple().first())
//!     .collect();
//! assert_eq!(firsts, vec![7, 1]);
//! assert_eq!(count_nodes(&tree), 3);
//! ```

use crate::config::TreeConfig;
use crate::error::{MmmError, Result};
use crate::model::Triple;
use crate::statistics::{Counters, Statistics};
use crate::tree::{BackwardTree, NodeId};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Every immediate predecessor of `triple`, distinct and sorted by first
/// component descending, negatives dropped unless `allow_negative`.
///
/// # Errors
///
/// - `NodeBudgetExceeded` if a degenerate range is too wide to hold in memory.
/// - `Overflow` if a candidate does not fit in an `i64`.
pub fn predecessors(triple: Triple, allow_negative: bool) -> Result<Vec<Triple>> {
    candidates(triple, allow_negative, usize::MAX, &mut Statistics::new())
}

/// Candidate predecessors of one node, counted into `statistics`.
///
/// `room` is how many more nodes the tree may hold; a candidate set larger
/// than that fails before it is materialized.
fn candidates(
    triple: Triple,
    allow_negative: bool,
    room: usize,
    statistics: &mut Statistics,
) -> Result<Vec<Triple>> {
    if !triple.has_backward() {
        statistics.increment(Counters::RigidLeaves);
        return Ok(Vec::new());
    }
    statistics.increment(Counters::ExpandedNodes);

    let Triple(c0, c1, diff) = triple;
    let (mn, mx) = (c0.min(c1), c0.max(c1));
    let out_of_range = || MmmError::Overflow { triple };
    let high = mn.checked_add(diff).ok_or_else(out_of_range)?;
    let low_candidate = mx.checked_sub(diff).ok_or_else(out_of_range)?;

    // Distinct and descending by construction in both branches.
    let firsts: Vec<i64> = if low_candidate == mn {
        statistics.increment(Counters::DegenerateBranches);
        if diff == 0 {
            // mn + diff and mx - diff coincide.
            statistics.increment(Counters::DuplicateCandidates);
        }
        let low = if allow_negative || mn >= 0 {
            mn
        } else {
            let dropped = i128::from(mx.min(-1)) - i128::from(mn) + 1;
            statistics.add(Counters::NegativePruned, dropped as u64);
            0
        };
        if mx < low {
            Vec::new()
        } else {
            let width = i128::from(mx) - i128::from(low) + 1;
            if width > room as i128 {
                return Err(MmmError::NodeBudgetExceeded { limit: room });
            }
            (low..=mx).rev().collect()
        }
    } else {
        let mut kept = Vec::with_capacity(2);
        for first in [high, low_candidate] {
            if first < 0 && !allow_negative {
                statistics.increment(Counters::NegativePruned);
            } else {
                kept.push(first);
            }
        }
        if kept.len() > room {
            return Err(MmmError::NodeBudgetExceeded { limit: room });
        }
        kept
    };

    Ok(firsts.into_iter().map(|x| Triple::new(x, c0, c1)).collect())
}

/// Builds backward trees under a fixed [`TreeConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Build the predecessor tree of `terminal`, `config.depth` levels deep.
    ///
    /// Depth 0 yields the terminal triple alone. A rigid triple stays a
    /// leaf whatever depth remains.
    ///
    /// # Errors
    ///
    /// - `NodeBudgetExceeded` if the tree would outgrow `config.max_nodes`.
    /// - `Overflow` if a predecessor does not fit in an `i64`.
    pub fn build(&self, terminal: Triple) -> Result<BackwardTree> {
        let limit = self.config.max_nodes.unwrap_or(usize::MAX).max(1);
        let mut statistics = Statistics::new();
        let mut tree = BackwardTree::with_root(terminal);

        let mut frontier: VecDeque<(NodeId, usize)> = VecDeque::new();
        if let Some(root) = tree.root() {
            frontier.push_back((root, self.config.depth));
        }

        while let Some((id, remaining)) = frontier.pop_front() {
            if remaining == 0 {
                continue;
            }
            let triple = tree.get(id)?.triple();
            let room = limit.saturating_sub(tree.len());
            let found = candidates(triple, self.config.allow_negative, room, &mut statistics)
                .map_err(|err| match err {
                    MmmError::NodeBudgetExceeded { .. } => MmmError::NodeBudgetExceeded { limit },
                    other => other,
                })?;
            trace!(node = %id, triple = %triple, remaining, children = found.len(), "expanded");
            for candidate in found {
                let child = tree.add_child(id, candidate)?;
                frontier.push_back((child, remaining - 1));
            }
        }

        debug!(
            terminal = %terminal,
            depth = self.config.depth,
            allow_negative = self.config.allow_negative,
            nodes = tree.len(),
            rigid = statistics.get(Counters::RigidLeaves),
            pruned = statistics.get(Counters::NegativePruned),
            "built backward tree"
        );
        tree.set_statistics(statistics);
        Ok(tree)
    }

    /// Build on the last three `terms` and prepend every earlier term as a
    /// forward-prefix node.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if fewer than three terms are given.
    pub fn build_from_forward(&self, terms: &[i64]) -> Result<BackwardTree> {
        let n = terms.len();
        if n < 3 {
            return Err(MmmError::InvalidInput {
                expected: 3,
                found: n,
            });
        }
        let terminal = Triple::try_from(&terms[n - 3..])?;
        let mut tree = self.build(terminal)?;
        tree.prepend_forward(&terms[..n - 3])?;
        Ok(tree)
    }
}

fn builder_for(depth: usize, allow_negative: bool) -> TreeBuilder {
    TreeBuilder::new(TreeConfig {
        depth,
        allow_negative,
        ..TreeConfig::default()
    })
}

/// Build the predecessor tree of `terminal` with the default node budget.
pub fn build_tree(terminal: Triple, depth: usize, allow_negative: bool) -> Result<BackwardTree> {
    builder_for(depth, allow_negative).build(terminal)
}

/// Build on the tail of a forward sequence, keeping its head as a linear prefix.
pub fn build_tree_from_forward(
    terms: &[i64],
    depth: usize,
    allow_negative: bool,
) -> Result<BackwardTree> {
    builder_for(depth, allow_negative).build_from_forward(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{count_nodes, NodeKind};

    fn child_triples(tree: &BackwardTree, id: NodeId) -> Vec<Triple> {
        tree.get(id)
            .unwrap()
            .children()
            .iter()
            .map(|&c| tree.get(c).unwrap().triple())
            .collect()
    }

    #[test]
    fn test_two_canonical_predecessors() {
        // mx = 5, mn = 3, diff = 4: 3 + 4 = 7 and 5 - 4 = 1.
        assert_eq!(
            predecessors(Triple::new(3, 5, 4), false).unwrap(),
            vec![Triple::new(7, 3, 5), Triple::new(1, 3, 5)]
        );
    }

    #[test]
    fn test_rigid_triple() {
        assert!(predecessors(Triple::new(10, 1, 3), false).unwrap().is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        // mx - diff == mn: every value in 2..=6 works.
        let found = predecessors(Triple::new(6, 2, 4), false).unwrap();
        let firsts: Vec<i64> = found.iter().map(|t| t.first()).collect();
        assert_eq!(firsts, vec![6, 5, 4, 3, 2]);
        assert!(found.iter().all(|t| t.next_term() == Ok(4)));
    }

    #[test]
    fn test_equal_pair_with_zero_spread() {
        assert_eq!(
            predecessors(Triple::new(4, 4, 0), false).unwrap(),
            vec![Triple::new(4, 4, 4)]
        );
    }

    #[test]
    fn test_negative_pruning() {
        // 1 - 5 = -4 is dropped unless negatives are allowed.
        assert_eq!(
            predecessors(Triple::new(1, 0, 5), false).unwrap(),
            vec![Triple::new(5, 1, 0)]
        );
        assert_eq!(
            predecessors(Triple::new(1, 0, 5), true).unwrap(),
            vec![Triple::new(5, 1, 0), Triple::new(-4, 1, 0)]
        );
    }

    #[test]
    fn test_negative_pruning_in_degenerate_range() {
        let mut statistics = Statistics::new();
        let found = candidates(Triple::new(-2, 2, 4), false, usize::MAX, &mut statistics).unwrap();
        let firsts: Vec<i64> = found.iter().map(|t| t.first()).collect();
        assert_eq!(firsts, vec![2, 1, 0]);
        assert_eq!(statistics.get(Counters::NegativePruned), 2);
    }

    #[test]
    fn test_candidates_out_of_range() {
        for triple in [Triple::new(5, 5, i64::MAX), Triple::new(i64::MIN, i64::MIN, 1)] {
            assert_eq!(
                predecessors(triple, true).unwrap_err(),
                MmmError::Overflow { triple }
            );
            assert_eq!(
                build_tree(triple, 1, true).unwrap_err(),
                MmmError::Overflow { triple }
            );
        }
        // A rigid extreme triple is a plain leaf.
        let tree = build_tree(Triple::new(i64::MAX, -1, 5), 1, false).unwrap();
        assert_eq!(count_nodes(&tree), 1);
        // Extreme but representable candidates are kept.
        assert_eq!(
            predecessors(Triple::new(0, 0, i64::MAX), true).unwrap(),
            vec![Triple::new(i64::MAX, 0, 0), Triple::new(-i64::MAX, 0, 0)]
        );
    }

    #[test]
    fn test_depth_zero_is_single_node() {
        let tree = build_tree(Triple::new(3, 5, 4), 0, false).unwrap();
        assert_eq!(count_nodes(&tree), 1);
        assert!(tree.get(tree.root().unwrap()).unwrap().is_leaf());
    }

    #[test]
    fn test_rigid_root_at_any_depth() {
        for depth in 1..5 {
            let tree = build_tree(Triple::new(10, 1, 3), depth, false).unwrap();
            assert_eq!(count_nodes(&tree), 1);
            assert_eq!(tree.statistics().get(Counters::RigidLeaves), 1);
        }
    }

    #[test]
    fn test_two_levels() {
        let tree = build_tree(Triple::new(3, 5, 4), 2, false).unwrap();
        let root = tree.branching_root().unwrap();
        assert_eq!(
            child_triples(&tree, root),
            vec![Triple::new(7, 3, 5), Triple::new(1, 3, 5)]
        );
        let children = tree.get(root).unwrap().children().to_vec();
        // (7, 3, 5): |7 - 3| = 4 <= 5, mx = 7, mn = 3 -> 8 and 2.
        assert_eq!(
            child_triples(&tree, children[0]),
            vec![Triple::new(8, 7, 3), Triple::new(2, 7, 3)]
        );
        // (1, 3, 5): mx = 3, mn = 1 -> 6 and -2 (pruned).
        assert_eq!(child_triples(&tree, children[1]), vec![Triple::new(6, 1, 3)]);
        assert_eq!(count_nodes(&tree), 6);
        assert_eq!(tree.statistics().get(Counters::NegativePruned), 1);
    }

    #[test]
    fn test_node_budget() {
        let builder = TreeBuilder::new(TreeConfig {
            depth: 3,
            allow_negative: false,
            max_nodes: Some(10),
        });
        assert_eq!(
            builder.build(Triple::new(0, 1000, 1000)).unwrap_err(),
            MmmError::NodeBudgetExceeded { limit: 10 }
        );
    }

    #[test]
    fn test_forward_prefix() {
        let terms = [2, 3, 5, 3, 2];
        let tree = build_tree_from_forward(&terms, 1, false).unwrap();
        let kinds: Vec<(Triple, NodeKind)> = tree
            .depth_first()
            .take(3)
            .map(|v| (v.triple, v.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Triple::new(2, 0, 0), NodeKind::Forward),
                (Triple::new(3, 0, 0), NodeKind::Forward),
                (Triple::new(5, 3, 2), NodeKind::Backward),
            ]
        );
        assert_eq!(
            tree.get(tree.branching_root().unwrap()).unwrap().triple(),
            Triple::new(5, 3, 2)
        );
    }

    #[test]
    fn test_forward_prefix_needs_three_terms() {
        assert_eq!(
            build_tree_from_forward(&[1, 2], 3, false).unwrap_err(),
            MmmError::InvalidInput { expected: 3, found: 2 }
        );
    }
}
