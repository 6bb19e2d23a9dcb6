// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Limits and defaults for generation and tree building.
//!
//! Every field has a default, so a TOML document only needs to name what it
//! overrides:
//!
//! ```
//! use mmm_sequence::config::ExplorerConfig;
//!
//! let config = ExplorerConfig::from_toml_str(
//!     r#"
//!     [tree]
//!     depth = 8
//!     allow_negative = true
//!     "#,
//! ).unwrap();
//! assert_eq!(config.tree.depth, 8);
//! assert!(config.generation.max_points.is_none());
//! ```

use crate::error::{MmmError, Result};
use serde::{Deserialize, Serialize};

/// Terms generated before an unbounded run is cut off.
pub const DEFAULT_ITERATION_CAP: usize = 1_000_000;

/// Nodes a backward tree may hold before building fails.
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Backward levels explored when no depth is given.
pub const DEFAULT_TREE_DEPTH: usize = 5;

/// Bounds on forward generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationLimits {
    /// Total sequence length, seeds included. `None` runs until a term is `<= 0`.
    pub max_points: Option<usize>,
    /// Safety cap on the total length of an unbounded run.
    pub iteration_cap: Option<usize>,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_points: None,
            iteration_cap: Some(DEFAULT_ITERATION_CAP),
        }
    }
}

/// Parameters of the backward tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub depth: usize,
    pub allow_negative: bool,
    pub max_nodes: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_TREE_DEPTH,
            allow_negative: false,
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub generation: GenerationLimits,
    pub tree: TreeConfig,
}

impl ExplorerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| MmmError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.generation.iteration_cap, Some(DEFAULT_ITERATION_CAP));
        assert_eq!(config.tree.depth, DEFAULT_TREE_DEPTH);
        assert!(!config.tree.allow_negative);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ExplorerConfig::from_toml_str("").unwrap(), ExplorerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ExplorerConfig::from_toml_str(
            "[generation]\nmax_points = 40\n\n[tree]\nmax_nodes = 500\n",
        )
        .unwrap();
        assert_eq!(config.generation.max_points, Some(40));
        assert_eq!(config.generation.iteration_cap, Some(DEFAULT_ITERATION_CAP));
        assert_eq!(config.tree.max_nodes, Some(500));
        assert_eq!(config.tree.depth, DEFAULT_TREE_DEPTH);
    }

    #[test]
    fn test_bad_document() {
        let err = ExplorerConfig::from_toml_str("[tree]\ndepth = \"deep\"\n").unwrap_err();
        assert!(matches!(err, MmmError::Config(_)));
    }
}
