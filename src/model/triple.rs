// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triple type: three consecutive terms of a sequence.
//!
//! A triple is the unit the recurrence operates on. Going forward, the
//! next term is `max - min` of the triple. Going backward, a triple
//! `(c0, c1, c2)` has a predecessor `(x, c0, c1)` exactly when some `x`
//! makes `max(x, c0, c1) - min(x, c0, c1) == c2`.
//!
//! # Examples
//!
//! ```
//! use mmm_sequence::model::Triple;
//!
//! let t = Triple::new(3, 5, 7);
//! assert_eq!(t.next_term(), Ok(4));
//! assert_eq!(t.shift(4), Triple::new(5, 7, 4));
//! assert!(t.has_backward());
//! assert_eq!(format!("{}", t), "(3, 5, 7)");
//! ```

use crate::error::{MmmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, immutable 3-tuple of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple(pub i64, pub i64, pub i64);

impl Triple {
    pub const fn new(x0: i64, x1: i64, x2: i64) -> Self {
        Self(x0, x1, x2)
    }

    /// The three values in order.
    pub fn values(self) -> [i64; 3] {
        [self.0, self.1, self.2]
    }

    pub fn first(self) -> i64 {
        self.0
    }

    pub fn last(self) -> i64 {
        self.2
    }

    pub fn max(self) -> i64 {
        self.0.max(self.1).max(self.2)
    }

    pub fn min(self) -> i64 {
        self.0.min(self.1).min(self.2)
    }

    /// The term the recurrence appends after this triple.
    ///
    /// # Errors
    ///
    /// `Overflow` if `max - min` does not fit in an `i64`.
    pub fn next_term(self) -> Result<i64> {
        self.max()
            .checked_sub(self.min())
            .ok_or(MmmError::Overflow { triple: self })
    }

    /// Drop the first value and append `next`.
    pub fn shift(self, next: i64) -> Self {
        Self(self.1, self.2, next)
    }

    /// True iff some earlier term could have produced this triple.
    ///
    /// A triple whose leading pair is further apart than its last value is
    /// rigid: no third value can make the spread equal to `c2`.
    pub fn has_backward(self) -> bool {
        (i128::from(self.0) - i128::from(self.1)).abs() <= i128::from(self.2)
    }

    /// The synthetic wrapper used for forward-prefix nodes.
    pub(crate) fn wrapper(value: i64) -> Self {
        Self(value, 0, 0)
    }
}

impl From<(i64, i64, i64)> for Triple {
    fn from((x0, x1, x2): (i64, i64, i64)) -> Self {
        Self(x0, x1, x2)
    }
}

impl From<[i64; 3]> for Triple {
    fn from([x0, x1, x2]: [i64; 3]) -> Self {
        Self(x0, x1, x2)
    }
}

impl TryFrom<&[i64]> for Triple {
    type Error = MmmError;

    fn try_from(values: &[i64]) -> Result<Self> {
        match values {
            [x0, x1, x2] => Ok(Self(*x0, *x1, *x2)),
            _ => Err(MmmError::InvalidInput {
                expected: 3,
                found: values.len(),
            }),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
