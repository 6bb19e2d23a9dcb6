// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mmm_sequence::tree::{BackwardTree, NodeId};
use mmm_sequence::Triple;

/// Route `tracing` output through the test harness; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The triples of a node's children, in stored order.
pub fn child_triples(tree: &BackwardTree, id: NodeId) -> Vec<Triple> {
    tree.get(id)
        .expect("node exists")
        .children()
        .iter()
        .map(|&child| tree.get(child).expect("child exists").triple())
        .collect()
}

/// The first few primes, as an externally supplied seed sequence.
pub const PRIMES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
