// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exploration of the max-minus-min (MMM) integer recurrence.
//!
//! Each new term of an MMM sequence is the maximum minus the minimum of the
//! three terms before it:
//!
//! ```text
//! s[i] = max(s[i-1], s[i-2], s[i-3]) - min(s[i-1], s[i-2], s[i-3])
//! ```
//!
//! # Architecture
//!
//! The crate is a pure library in four layers, leaves first:
//!
//! 1. **Recurrence** ([`recurrence`]): forward generation from an initial
//!    triple, until a term reaches zero or a point budget is spent
//! 2. **Seeds** ([`seeds`]): batches of initial triples from windows over an
//!    external sequence, parameter grids, or an injected random source
//! 3. **Backward trees** ([`tree`]): every predecessor triple that could have
//!    produced a terminal triple, enumerated level by level into an arena
//! 4. **Labeling** ([`labeling`]): per-position window roles, shifting points
//!    and backward-branch types
//!
//! Everything is synchronous and side-effect free apart from the `Rng`
//! handed to the random initializer. Rendering and CLI concerns live
//! outside the crate; they consume plain numeric series, the depth-first
//! walk of a tree, or its serialized [`tree::TreeExport`].
//!
//! # Example
//!
//! ```
//! use mmm_sequence::{generate, build_tree, enumerate_paths, label_all};
//!
//! let seq = generate(&[2, 3, 5], None).unwrap();
//! assert_eq!(seq.last(), 0);
//!
//! let tree = build_tree(seq.last_triple(), 3, false).unwrap();
//! let paths = enumerate_paths(&tree).unwrap();
//! let labels = label_all(&paths.term_sequences()).unwrap();
//! assert_eq!(labels.len(), paths.len());
//! ```

pub mod config;
pub mod error;
pub mod labeling;
pub mod model;
pub mod recurrence;
pub mod seeds;
pub mod statistics;
pub mod tree;

// Re-export commonly used types
pub use config::ExplorerConfig;
pub use error::{MmmError, Result};
pub use labeling::{label, label_all, LabeledValue};
pub use model::{Sequence, Triple};
pub use recurrence::{generate, generate_many, Generator};
pub use tree::{build_tree, count_nodes, enumerate_paths, BackwardTree, TreeBuilder};
