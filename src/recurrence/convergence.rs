// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Convergence data: the scalar series a plotting collaborator consumes.
//!
//! For a sequence generated from an arithmetic seed `(a, a+d, a+2d)`,
//! the record keeps `a`, `d`, the number of terms it took to collapse, and
//! the last term before the collapse.

use crate::error::{MmmError, Result};
use crate::model::Sequence;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConvergenceRecord {
    pub a: i64,
    pub d: i64,
    pub time: usize,
    pub value: i64,
}

impl ConvergenceRecord {
    /// # Errors
    ///
    /// `Overflow` if the step `d` between the first two seeds does not fit in an `i64`.
    pub fn of(seq: &Sequence) -> Result<Self> {
        let terms = seq.terms();
        let d = terms[1]
            .checked_sub(terms[0])
            .ok_or(MmmError::Overflow { triple: seq.seed() })?;
        Ok(Self {
            a: terms[0],
            d,
            time: seq.convergence_time(),
            value: seq.convergence_value(),
        })
    }

    pub fn collect(seqs: &[Sequence]) -> Result<Vec<Self>> {
        seqs.iter().map(Self::of).collect()
    }
}

pub fn convergence_times(seqs: &[Sequence]) -> Vec<usize> {
    seqs.iter().map(Sequence::convergence_time).collect()
}

pub fn convergence_values(seqs: &[Sequence]) -> Vec<i64> {
    seqs.iter().map(Sequence::convergence_value).collect()
}
