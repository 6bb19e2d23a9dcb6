// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence type: the seeds followed by every term the recurrence derived.

use crate::model::Triple;
use serde::Serialize;

/// An ordered list of terms starting from an initial triple.
///
/// Terms are only ever appended; index 3 onwards always satisfies the
/// recurrence over the three preceding terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    terms: Vec<i64>,
    /// Set when the safety iteration cap, not the recurrence, ended generation.
    capped: bool,
}

impl Sequence {
    pub(crate) fn from_seed(seed: Triple, capacity: usize) -> Self {
        let mut terms = Vec::with_capacity(capacity.max(3));
        terms.extend_from_slice(&seed.values());
        Self {
            terms,
            capped: false,
        }
    }

    pub(crate) fn push(&mut self, term: i64) {
        self.terms.push(term);
    }

    pub(crate) fn mark_capped(&mut self) {
        self.capped = true;
    }

    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<i64> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn seed(&self) -> Triple {
        Triple::new(self.terms[0], self.terms[1], self.terms[2])
    }

    pub fn last(&self) -> i64 {
        self.terms[self.terms.len() - 1]
    }

    /// The final three terms.
    pub fn last_triple(&self) -> Triple {
        let n = self.terms.len();
        Triple::new(self.terms[n - 3], self.terms[n - 2], self.terms[n - 1])
    }

    pub fn capped(&self) -> bool {
        self.capped
    }

    /// Number of terms it took to reach the stopping point.
    pub fn convergence_time(&self) -> usize {
        self.terms.len()
    }

    /// The last term before the sequence collapsed to zero.
    pub fn convergence_value(&self) -> i64 {
        self.terms[self.terms.len() - 2]
    }

    /// Check the recurrence invariant over every derived term.
    pub fn satisfies_recurrence(&self) -> bool {
        self.terms
            .windows(4)
            .all(|w| Triple::new(w[0], w[1], w[2]).next_term() == Ok(w[3]))
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_and_accessors() {
        let mut seq = Sequence::from_seed(Triple::new(4, 6, 9), 8);
        seq.push(5);
        assert_eq!(seq.terms(), &[4, 6, 9, 5]);
        assert_eq!(seq.seed(), Triple::new(4, 6, 9));
        assert_eq!(seq.last_triple(), Triple::new(6, 9, 5));
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.convergence_time(), 4);
        assert_eq!(seq.convergence_value(), 9);
        assert!(seq.satisfies_recurrence());
        assert!(!seq.capped());
    }

    #[test]
    fn test_recurrence_violation_detected() {
        let mut seq = Sequence::from_seed(Triple::new(1, 2, 3), 4);
        seq.push(7);
        assert!(!seq.satisfies_recurrence());
    }
}
