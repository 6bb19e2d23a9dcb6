// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over small random inputs.

use mmm_sequence::config::TreeConfig;
use mmm_sequence::labeling::{label_terms, BranchType};
use mmm_sequence::tree::TreeBuilder;
use mmm_sequence::{count_nodes, enumerate_paths, generate, Triple};
use proptest::prelude::*;

fn small_triple() -> impl Strategy<Value = Triple> {
    (0i64..40, 0i64..40, 0i64..40).prop_map(|(a, b, c)| Triple::new(a, b, c))
}

fn signed_triple() -> impl Strategy<Value = Triple> {
    (-40i64..40, -40i64..40, -40i64..40).prop_map(|(a, b, c)| Triple::new(a, b, c))
}

fn builder(depth: usize) -> TreeBuilder {
    TreeBuilder::new(TreeConfig {
        depth,
        allow_negative: false,
        max_nodes: Some(200_000),
    })
}

proptest! {
    /// Unbounded runs end at a non-positive term and every derived term
    /// obeys the recurrence, negative seeds included.
    #[test]
    fn generation_terminates(t in signed_triple()) {
        let seq = generate(&t.values(), None).unwrap();
        prop_assert!(!seq.capped());
        prop_assert!(seq.last() <= 0);
        prop_assert!(seq.satisfies_recurrence());
        prop_assert!(seq.terms()[3..].iter().all(|&term| term >= 0));
    }

    /// A point budget fixes the length exactly.
    #[test]
    fn bounded_length(t in small_triple(), max_points in 3usize..60) {
        let seq = generate(&t.values(), Some(max_points)).unwrap();
        prop_assert_eq!(seq.len(), max_points);
        prop_assert!(seq.satisfies_recurrence());
    }

    /// Depth 0 is the terminal triple alone.
    #[test]
    fn depth_zero_single_node(t in small_triple()) {
        let tree = builder(0).build(t).unwrap();
        prop_assert_eq!(count_nodes(&tree), 1);
    }

    /// Children of any tree stay non-negative unless requested.
    #[test]
    fn pruned_children_non_negative(t in signed_triple(), depth in 1usize..4) {
        let tree = builder(depth).build(t).unwrap();
        for visit in tree.depth_first().skip(1) {
            prop_assert!(visit.triple.first() >= 0);
        }
    }

    /// Deeper trees never have fewer nodes.
    #[test]
    fn counts_monotone_in_depth(t in small_triple(), depth in 0usize..4) {
        let shallow = count_nodes(&builder(depth).build(t).unwrap());
        let deep = count_nodes(&builder(depth + 1).build(t).unwrap());
        prop_assert!(shallow <= deep);
    }

    /// Paths fit within depth + 1 triples and end at the branching root.
    #[test]
    fn paths_end_at_root(t in signed_triple(), depth in 0usize..4) {
        let tree = builder(depth).build(t).unwrap();
        let paths = enumerate_paths(&tree).unwrap();
        prop_assert!(paths.width() <= depth + 1);
        for index in 0..paths.len() {
            let path = paths.unpadded(index).unwrap();
            prop_assert_eq!(*path.last().unwrap(), t);
        }
    }

    /// BLOCK labels exactly the rigid windows.
    #[test]
    fn block_iff_rigid(terms in prop::collection::vec(0i64..30, 3..20)) {
        let labels = label_terms(&terms);
        for i in 0..terms.len() - 2 {
            let window = Triple::new(terms[i], terms[i + 1], terms[i + 2]);
            prop_assert_eq!(labels[i].branch_type == BranchType::Block, !window.has_backward());
        }
    }
}
