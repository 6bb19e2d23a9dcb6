// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Roles a term plays inside the 3-windows that contain it.
//!
//! A term at index `i` sits at position 0 of `[i, i+1, i+2]`, position 1 of
//! `[i-1, i, i+1]` and position 2 of `[i-2, i-1, i]`. Its [`Signature`]
//! records the role it takes in each of those windows.

use serde::Serialize;
use std::fmt;

/// The role of one position within a 3-window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Max,
    Min,
    Mid,
    /// The window would run past either end of the sequence.
    NotApplicable,
}

impl Role {
    /// True for `Max` and `Min`.
    pub fn is_extremum(self) -> bool {
        matches!(self, Role::Max | Role::Min)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Max => "MAX",
            Role::Min => "MIN",
            Role::Mid => "MID",
            Role::NotApplicable => "N/A",
        };
        f.write_str(s)
    }
}

/// Roles at window positions 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Signature {
    pub at_0: Role,
    pub at_1: Role,
    pub at_2: Role,
}

impl Signature {
    pub fn roles(self) -> [Role; 3] {
        [self.at_0, self.at_1, self.at_2]
    }

    /// Never an extremum in any window the term belongs to.
    pub fn is_ignored(self) -> bool {
        !self.roles().iter().any(|role| role.is_extremum())
    }
}

/// Role of `window[pos]`.
///
/// Three equal values get the fixed roles MIN, MAX, MID. Otherwise the
/// first occurrence of the maximum is MAX, the first occurrence of the
/// minimum is MIN and the remaining position is MID.
pub fn window_role(window: [i64; 3], pos: usize) -> Role {
    if window[0] == window[1] && window[1] == window[2] {
        return [Role::Min, Role::Max, Role::Mid][pos];
    }
    let mut max_at = 0;
    let mut min_at = 0;
    for (at, &value) in window.iter().enumerate().skip(1) {
        if value > window[max_at] {
            max_at = at;
        }
        if value < window[min_at] {
            min_at = at;
        }
    }
    if pos == max_at {
        Role::Max
    } else if pos == min_at {
        Role::Min
    } else {
        Role::Mid
    }
}

/// The signature of `terms[i]`.
pub fn signature(terms: &[i64], i: usize) -> Signature {
    let n = terms.len();
    let role_in = |start: usize, pos: usize| {
        window_role([terms[start], terms[start + 1], terms[start + 2]], pos)
    };
    Signature {
        at_0: if i + 2 < n { role_in(i, 0) } else { Role::NotApplicable },
        at_1: if i >= 1 && i + 1 < n { role_in(i - 1, 1) } else { Role::NotApplicable },
        at_2: if i >= 2 && i < n { role_in(i - 2, 2) } else { Role::NotApplicable },
    }
}
