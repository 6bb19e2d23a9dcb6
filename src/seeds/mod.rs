// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seed-derived initializer: turning integer lists and parameter grids
//! into batches of initial triples.
//!
//! # Strategies
//!
//! - Windowed: every width-3 window of an externally supplied sequence
//! - Grid (A, D): arithmetic progressions over two axes
//! - Grid (X, Y, Z): cross product of three axes
//! - Random: independent draws from an injected random source
//!
//! All strategies are pure; the only state they read is the `Rng` handed
//! to the random strategy.
//!
//! # Example
//!
//! ```
//! use mmm_sequence::model::Triple;
//! use mmm_sequence::seeds::windowed;
//!
//! let inits = windowed(&[2, 3, 5, 7, 11]);
//! assert_eq!(inits, vec![Triple::new(2, 3, 5), Triple::new(3, 5, 7), Triple::new(5, 7, 11)]);
//! ```

pub mod grid;
pub mod random;

pub use grid::{grid_ad, grid_xyz, inclusive_axis, sweep_inits, Sweep, VaryParam};
pub use random::{random_init, random_inits, random_inits_unseeded};

use crate::error::{MmmError, Result};
use crate::model::Triple;
use rand::Rng;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};
use tracing::debug;

/// Sliding windows of width 3: `n - 2` triples for a sequence of length `n`.
pub fn windowed(seed_seq: &[i64]) -> Vec<Triple> {
    seed_seq
        .windows(3)
        .map(|w| Triple::new(w[0], w[1], w[2]))
        .collect()
}

/// An external supplier of seed sequences (primes, naturals, ...).
pub trait SeedSource {
    /// The first `n` terms of the sequence.
    fn seed_terms(&self, n: usize) -> Vec<i64>;
}

impl SeedSource for [i64] {
    fn seed_terms(&self, n: usize) -> Vec<i64> {
        self.iter().take(n).copied().collect()
    }
}

impl SeedSource for Vec<i64> {
    fn seed_terms(&self, n: usize) -> Vec<i64> {
        self.as_slice().seed_terms(n)
    }
}

/// Adapts a generator function `n -> first n terms` into a [`SeedSource`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<F> SeedSource for FromFn<F>
where
    F: Fn(usize) -> Vec<i64>,
{
    fn seed_terms(&self, n: usize) -> Vec<i64> {
        (self.0)(n)
    }
}

/// Windowed triples over the first `n` terms of `source`.
pub fn inits_from_source<S: SeedSource + ?Sized>(source: &S, n: usize) -> Vec<Triple> {
    let inits = windowed(&source.seed_terms(n));
    debug!(requested = n, triples = inits.len(), "windowed seed source");
    inits
}

/// The named ways of producing a batch of initial triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum InitCategory {
    #[strum(serialize = "random")]
    Random,
    #[strum(serialize = "As_Ds")]
    AsDs,
    #[strum(serialize = "Xs_Ys_Zs")]
    XsYsZs,
    #[strum(serialize = "manual")]
    Manual,
}

impl InitCategory {
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name)
            .map_err(|_| MmmError::InvalidParameter(format!("inits_category '{}'", name)))
    }
}

/// A category together with its parameters. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitRequest {
    Random { n: usize, max_val: i64 },
    AsDs { a: (i64, i64), d: (i64, i64) },
    XsYsZs { x: (i64, i64), y: (i64, i64), z: (i64, i64) },
    Manual(Vec<Triple>),
}

impl InitRequest {
    /// The request a category gets when no parameters are supplied.
    pub fn default_for(category: InitCategory) -> Self {
        match category {
            InitCategory::Random => InitRequest::Random { n: 1, max_val: 100 },
            InitCategory::AsDs => InitRequest::AsDs { a: (0, 10), d: (0, 10) },
            InitCategory::XsYsZs => InitRequest::XsYsZs {
                x: (0, 5),
                y: (0, 5),
                z: (0, 5),
            },
            InitCategory::Manual => InitRequest::Manual(Vec::new()),
        }
    }

    pub fn category(&self) -> InitCategory {
        match self {
            InitRequest::Random { .. } => InitCategory::Random,
            InitRequest::AsDs { .. } => InitCategory::AsDs,
            InitRequest::XsYsZs { .. } => InitCategory::XsYsZs,
            InitRequest::Manual(_) => InitCategory::Manual,
        }
    }
}

/// Produce the triples a request describes.
///
/// # Errors
///
/// `InvalidParameter` for an inverted axis, a progression outside the `i64`
/// range, a negative random bound, or a manual request with no triples.
pub fn build_inits<R: Rng + ?Sized>(request: &InitRequest, rng: &mut R) -> Result<Vec<Triple>> {
    let inits = match request {
        InitRequest::Random { n, max_val } => random_inits(*n, *max_val, rng)?,
        InitRequest::AsDs { a, d } => grid_ad(
            &inclusive_axis("a", a.0, a.1)?,
            &inclusive_axis("d", d.0, d.1)?,
        )?,
        InitRequest::XsYsZs { x, y, z } => grid_xyz(
            &inclusive_axis("x", x.0, x.1)?,
            &inclusive_axis("y", y.0, y.1)?,
            &inclusive_axis("z", z.0, z.1)?,
        ),
        InitRequest::Manual(triples) => {
            if triples.is_empty() {
                return Err(MmmError::InvalidParameter(
                    "manual category needs at least one initial triple".into(),
                ));
            }
            triples.clone()
        }
    };
    let category = request.category();
    debug!(category = category.as_ref(), triples = inits.len(), "built inits");
    Ok(inits)
}
