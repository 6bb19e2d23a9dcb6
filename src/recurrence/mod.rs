// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Forward generation of the max-minus-min recurrence.
//!
//! Each new term is the spread (maximum minus minimum) of the three terms
//! before it. Without a point budget, generation stops at the first term
//! that is `<= 0`; zero is absorbing for non-negative seeds.
//!
//! # Example
//!
//! ```
//! use mmm_sequence::recurrence::generate;
//!
//! let seq = generate(&[5, 5, 5], None).unwrap();
//! assert_eq!(seq.terms(), &[5, 5, 5, 0]);
//!
//! let seq = generate(&[1, 2, 3], Some(5)).unwrap();
//! assert_eq!(seq.terms(), &[1, 2, 3, 2, 1]);
//! ```
//!
//! Termination of unbounded runs is not proven for every seed, so a
//! [`Generator`] carries an iteration cap; runs stopped by it are flagged
//! with [`Sequence::capped`].

pub mod convergence;

pub use convergence::{convergence_times, convergence_values, ConvergenceRecord};

use crate::config::GenerationLimits;
use crate::error::{MmmError, Result};
use crate::model::{Sequence, Triple};
use tracing::warn;

/// Runs the recurrence under a fixed set of limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    limits: GenerationLimits,
}

impl Generator {
    pub fn new(limits: GenerationLimits) -> Self {
        Self { limits }
    }

    /// Same limits, with the point budget replaced.
    pub fn with_max_points(mut self, max_points: Option<usize>) -> Self {
        self.limits.max_points = max_points;
        self
    }

    pub fn limits(&self) -> GenerationLimits {
        self.limits
    }

    /// Generate the sequence that starts from `seed`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the point budget is smaller than the three seeds.
    /// - `Overflow` if a term does not fit in an `i64`.
    pub fn run(&self, seed: Triple) -> Result<Sequence> {
        match self.limits.max_points {
            Some(max_points) => Self::run_bounded(seed, max_points),
            None => self.run_until_zero(seed),
        }
    }

    /// Generate one sequence per seed; runs share nothing.
    pub fn run_many<I>(&self, seeds: I) -> Result<Vec<Sequence>>
    where
        I: IntoIterator<Item = Triple>,
    {
        seeds.into_iter().map(|seed| self.run(seed)).collect()
    }

    fn run_bounded(seed: Triple, max_points: usize) -> Result<Sequence> {
        if max_points < 3 {
            return Err(MmmError::InvalidParameter(format!(
                "max_points must be at least 3, got {}",
                max_points
            )));
        }
        let mut seq = Sequence::from_seed(seed, max_points);
        let mut window = seed;
        for _ in 3..max_points {
            let next = window.next_term()?;
            seq.push(next);
            window = window.shift(next);
        }
        Ok(seq)
    }

    fn run_until_zero(&self, seed: Triple) -> Result<Sequence> {
        let cap = self.limits.iteration_cap.unwrap_or(usize::MAX);
        let mut seq = Sequence::from_seed(seed, 16);
        let mut window = seed;
        while window.last() > 0 {
            if seq.len() >= cap {
                warn!(seed = %seed, cap, "iteration cap reached before the sequence reached zero");
                seq.mark_capped();
                break;
            }
            let next = window.next_term()?;
            seq.push(next);
            window = window.shift(next);
        }
        Ok(seq)
    }
}

/// Generate the sequence for one initial triple given as a slice.
///
/// `max_points` is the total length, seeds included, so its minimum is 3:
/// the three seeds alone already take three terms.
///
/// # Errors
///
/// - `InvalidInput` if `init` does not hold exactly three values.
/// - `InvalidParameter` if `max_points` is below 3.
/// - `Overflow` if a term does not fit in an `i64`.
pub fn generate(init: &[i64], max_points: Option<usize>) -> Result<Sequence> {
    let seed = Triple::try_from(init)?;
    Generator::default().with_max_points(max_points).run(seed)
}

/// Generate one sequence per initial triple, independently.
///
/// Fails on the first malformed triple.
pub fn generate_many<T>(inits: &[T], max_points: Option<usize>) -> Result<Vec<Sequence>>
where
    T: AsRef<[i64]>,
{
    let generator = Generator::default().with_max_points(max_points);
    inits
        .iter()
        .map(|init| generator.run(Triple::try_from(init.as_ref())?))
        .collect()
}
