// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types shared by every module of the crate.

use crate::model::Triple;
use crate::tree::NodeId;

/// Errors raised by generation, initialization, tree building and labeling.
///
/// All of them are raised synchronously at the point of the invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MmmError {
    /// A triple was built from a slice of the wrong length.
    #[error("expected {expected} initial values, found {found}")]
    InvalidInput { expected: usize, found: usize },

    /// Traversal was invoked on a tree with no root.
    #[error("tree is empty")]
    EmptyTree,

    /// A node id does not resolve to a node in the arena.
    #[error("node {id} does not exist")]
    NullNode { id: NodeId },

    /// An initializer category, sweep parameter or bound was rejected.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A step of the recurrence, forward or backward, left the `i64` range.
    #[error("arithmetic on {triple} leaves the i64 range")]
    Overflow { triple: Triple },

    /// A placeholder appeared after the first real value of a sequence.
    #[error("placeholder at index {index} follows a real value")]
    InteriorPlaceholder { index: usize },

    /// Building the tree would allocate more than the configured number of nodes.
    #[error("backward tree exceeded {limit} nodes")]
    NodeBudgetExceeded { limit: usize },

    /// A TOML configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MmmError::InvalidInput { expected: 3, found: 2 };
        assert_eq!(err.to_string(), "expected 3 initial values, found 2");

        let err = MmmError::NullNode { id: NodeId::new(7) };
        assert_eq!(err.to_string(), "node #7 does not exist");

        let err = MmmError::InvalidParameter("inits_category 'spiral'".into());
        assert_eq!(err.to_string(), "invalid parameter: inits_category 'spiral'");

        let err = MmmError::Overflow {
            triple: Triple::new(i64::MIN, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "arithmetic on (-9223372036854775808, 0, 1) leaves the i64 range"
        );
    }
}
