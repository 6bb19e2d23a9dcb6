// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural labeling of sequences.
//!
//! Every real term of a sequence is decorated with:
//! - its [`Signature`] across the 3-windows containing it
//! - an `ignored` flag (never an extremum in any of those windows)
//! - a shifting-point flag (the window GCD strictly increases at this term)
//! - the [`BranchType`] of the window it starts
//!
//! Sequences may be left-padded with `None` placeholders, as produced by
//! [`crate::tree::PathSet::term_sequences`]; placeholders map to `None`
//! labels and are invisible to the window arithmetic.
//!
//! # Example
//!
//! ```
//! use mmm_sequence::labeling::{label_terms, BranchType, Role};
//!
//! let labels = label_terms(&[5, 5, 5, 0]);
//! assert_eq!(labels[0].signature.at_0, Role::Min);
//! assert_eq!(labels[1].signature.at_1, Role::Max);
//! // |5 - 5| < 5: two predecessors.
//! assert_eq!(labels[0].branch_type, BranchType::Double);
//! ```

pub mod branch;
pub mod signature;

pub use branch::{branch_type, gcd3, is_shifting_point, BranchType};
pub use signature::{signature, window_role, Role, Signature};

use crate::error::{MmmError, Result};
use serde::Serialize;

/// One labeled position of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    pub value: i64,
    pub signature: Signature,
    pub ignored: bool,
    pub shifting_point: bool,
    pub branch_type: BranchType,
}

impl LabeledValue {
    pub fn is_extremum_anywhere(&self) -> bool {
        !self.ignored
    }
}

/// Label a sequence with no placeholders.
pub fn label_terms(terms: &[i64]) -> Vec<LabeledValue> {
    (0..terms.len())
        .map(|i| {
            let signature = signature(terms, i);
            LabeledValue {
                value: terms[i],
                signature,
                ignored: signature.is_ignored(),
                shifting_point: is_shifting_point(terms, i),
                branch_type: branch_type(terms, i),
            }
        })
        .collect()
}

/// Label a possibly left-padded sequence.
///
/// The output has one entry per input entry; leading placeholders map to
/// `None`, and indices in the labels count from the first real term.
///
/// # Errors
///
/// `InteriorPlaceholder` if a placeholder follows a real term.
pub fn label(sequence: &[Option<i64>]) -> Result<Vec<Option<LabeledValue>>> {
    let padding = sequence.iter().take_while(|entry| entry.is_none()).count();
    let terms = sequence[padding..]
        .iter()
        .enumerate()
        .map(|(offset, entry)| {
            entry.ok_or(MmmError::InteriorPlaceholder {
                index: padding + offset,
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    let mut labels = vec![None; padding];
    labels.extend(label_terms(&terms).into_iter().map(Some));
    Ok(labels)
}

/// Label every path of a rectangular collection independently.
pub fn label_all(paths: &[Vec<Option<i64>>]) -> Result<Vec<Vec<Option<LabeledValue>>>> {
    paths.iter().map(|path| label(path)).collect()
}
