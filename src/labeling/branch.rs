// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backward-branch types and shifting points.

use serde::Serialize;

/// How many predecessors the window starting at a term admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BranchType {
    /// `|s[i] - s[i+1]| > s[i+2]`: no predecessor.
    Block,
    /// `|s[i] - s[i+1]| < s[i+2]`: exactly two predecessors.
    Double,
    /// `|s[i] - s[i+1]| == s[i+2]`: a whole range of predecessors.
    ///
    /// Also the sentinel for the last two terms, whose window runs off the end.
    Multi,
}

/// Branch type of the window starting at `terms[i]`.
pub fn branch_type(terms: &[i64], i: usize) -> BranchType {
    if i + 2 >= terms.len() {
        return BranchType::Multi;
    }
    let spread = (i128::from(terms[i]) - i128::from(terms[i + 1])).abs();
    let next = i128::from(terms[i + 2]);
    match spread.cmp(&next) {
        std::cmp::Ordering::Greater => BranchType::Block,
        std::cmp::Ordering::Equal => BranchType::Multi,
        std::cmp::Ordering::Less => BranchType::Double,
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of three values, ignoring sign; `gcd3(0, 0, 0) == 0`.
pub fn gcd3(a: i64, b: i64, c: i64) -> u64 {
    gcd(gcd(a.unsigned_abs(), b.unsigned_abs()), c.unsigned_abs())
}

/// True iff the window at `i` has a strictly larger GCD than the window at `i - 1`.
pub fn is_shifting_point(terms: &[i64], i: usize) -> bool {
    if i < 1 || i + 2 >= terms.len() {
        return false;
    }
    gcd3(terms[i], terms[i + 1], terms[i + 2]) > gcd3(terms[i - 1], terms[i], terms[i + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_types() {
        assert_eq!(branch_type(&[10, 1, 3], 0), BranchType::Block);
        assert_eq!(branch_type(&[6, 2, 4], 0), BranchType::Multi);
        assert_eq!(branch_type(&[3, 5, 4], 0), BranchType::Double);
    }

    #[test]
    fn test_branch_types_at_extremes() {
        assert_eq!(branch_type(&[i64::MIN, i64::MAX, 5], 0), BranchType::Block);
        assert_eq!(branch_type(&[i64::MAX, -1, i64::MAX], 0), BranchType::Block);
        assert_eq!(branch_type(&[i64::MAX, 0, i64::MAX], 0), BranchType::Multi);
    }

    #[test]
    fn test_sentinel_at_end() {
        let terms = [10, 1, 3];
        assert_eq!(branch_type(&terms, 1), BranchType::Multi);
        assert_eq!(branch_type(&terms, 2), BranchType::Multi);
    }

    #[test]
    fn test_gcd3() {
        assert_eq!(gcd3(12, 18, 30), 6);
        assert_eq!(gcd3(-4, 6, 0), 2);
        assert_eq!(gcd3(0, 0, 0), 0);
        assert_eq!(gcd3(7, 0, 0), 7);
    }

    #[test]
    fn test_shifting_point() {
        // gcd(3, 6, 9) = 3 > gcd(1, 3, 6) = 1
        let terms = [1, 3, 6, 9];
        assert!(!is_shifting_point(&terms, 0));
        assert!(is_shifting_point(&terms, 1));
        assert!(!is_shifting_point(&terms, 2));
        assert!(!is_shifting_point(&terms, 3));
        // Equal GCDs do not count.
        assert!(!is_shifting_point(&[2, 4, 6, 8], 1));
    }
}
