// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parameterized grids of initial triples.
//!
//! - `(A, D)`: arithmetic progressions `(a, a+d, a+2d)`, `As`-major
//! - `(X, Y, Z)`: the full cross product, `Xs`-major, `Zs`-minor
//!
//! Grid axes are usually inclusive bounds; [`inclusive_axis`] rejects
//! inverted ones.

use crate::error::{MmmError, Result};
use crate::model::Triple;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};

/// One triple `(a, a+d, a+2d)` per pair, `As`-major and `Ds`-minor.
///
/// # Errors
///
/// `InvalidParameter` if a progression leaves the `i64` range.
pub fn grid_ad(a_values: &[i64], d_values: &[i64]) -> Result<Vec<Triple>> {
    let mut inits = Vec::with_capacity(a_values.len() * d_values.len());
    for &a in a_values {
        for &d in d_values {
            inits.push(progression(a, d)?);
        }
    }
    Ok(inits)
}

fn progression(a: i64, d: i64) -> Result<Triple> {
    let term = |k: i128| i64::try_from(i128::from(a) + k * i128::from(d)).ok();
    match (term(1), term(2)) {
        (Some(second), Some(third)) => Ok(Triple::new(a, second, third)),
        _ => Err(MmmError::InvalidParameter(format!(
            "progression a={} d={} leaves the i64 range",
            a, d
        ))),
    }
}

/// One triple per element of `Xs × Ys × Zs`, in lexicographic order.
pub fn grid_xyz(x_values: &[i64], y_values: &[i64], z_values: &[i64]) -> Vec<Triple> {
    let mut inits = Vec::with_capacity(x_values.len() * y_values.len() * z_values.len());
    for &x in x_values {
        for &y in y_values {
            for &z in z_values {
                inits.push(Triple::new(x, y, z));
            }
        }
    }
    inits
}

/// The values `min..=max`.
///
/// # Errors
///
/// `InvalidParameter` if `min > max`; `name` identifies the axis in the message.
pub fn inclusive_axis(name: &str, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(MmmError::InvalidParameter(format!(
            "{} range is inverted: min {} > max {}",
            name, min, max
        )));
    }
    Ok((min..=max).collect())
}

/// Which parameter of an arithmetic seed a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum VaryParam {
    #[strum(serialize = "a")]
    Start,
    #[strum(serialize = "d")]
    Step,
}

impl VaryParam {
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name)
            .map_err(|_| MmmError::InvalidParameter(format!("vary_param '{}'", name)))
    }
}

/// A one-dimensional slice through the `(A, D)` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    /// Values of the varied parameter, in order; the x-axis of a plot.
    pub axis: Vec<i64>,
    /// One initial triple per axis value.
    pub inits: Vec<Triple>,
}

/// Vary `param` over `min..=max` while the other parameter stays at `fixed`.
pub fn sweep_inits(param: VaryParam, min: i64, max: i64, fixed: i64) -> Result<Sweep> {
    let axis = inclusive_axis(param.as_ref(), min, max)?;
    let inits = match param {
        VaryParam::Start => grid_ad(&axis, &[fixed])?,
        VaryParam::Step => grid_ad(&[fixed], &axis)?,
    };
    Ok(Sweep { axis, inits })
}
