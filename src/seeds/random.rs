// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomly drawn initial triples.
//!
//! The random source is always passed in, so a seeded generator makes the
//! draw reproducible:
//!
//! ```
//! use mmm_sequence::seeds::random_inits;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let first = random_inits(4, 100, &mut StdRng::seed_from_u64(7)).unwrap();
//! let again = random_inits(4, 100, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(first, again);
//! ```

use crate::error::{MmmError, Result};
use crate::model::Triple;
use rand::Rng;

fn check_bound(max_val: i64) -> Result<()> {
    if max_val < 0 {
        return Err(MmmError::InvalidParameter(format!(
            "max_val must be non-negative, got {}",
            max_val
        )));
    }
    Ok(())
}

/// One triple of independent draws from `[0, max_val]`.
///
/// # Errors
///
/// `InvalidParameter` if `max_val` is negative.
pub fn random_init<R: Rng + ?Sized>(max_val: i64, rng: &mut R) -> Result<Triple> {
    check_bound(max_val)?;
    Ok(Triple::new(
        rng.gen_range(0..=max_val),
        rng.gen_range(0..=max_val),
        rng.gen_range(0..=max_val),
    ))
}

/// `n` independent triples with every value in `[0, max_val]`.
pub fn random_inits<R: Rng + ?Sized>(n: usize, max_val: i64, rng: &mut R) -> Result<Vec<Triple>> {
    check_bound(max_val)?;
    (0..n).map(|_| random_init(max_val, rng)).collect()
}

/// Draw from the thread-local generator when reproducibility does not matter.
pub fn random_inits_unseeded(n: usize, max_val: i64) -> Result<Vec<Triple>> {
    random_inits(n, max_val, &mut rand::thread_rng())
}
