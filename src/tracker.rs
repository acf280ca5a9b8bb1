//! Covered-tuple bookkeeping.
//!
//! Scoring ([`CoverageTracker::new_coverage_count`]) only reads the covered
//! set, so a whole batch of trial permutations can be scored against the same
//! state before the single winner is committed.

use std::collections::HashSet;

use crate::types::{Permutation, Symbol, TupleKey};
use crate::universe::TupleUniverse;

#[derive(Debug, Clone)]
pub struct CoverageTracker {
    universe: TupleUniverse,
    covered: HashSet<TupleKey>,
}

impl CoverageTracker {
    pub fn new(universe: TupleUniverse) -> Self {
        Self {
            universe,
            covered: HashSet::new(),
        }
    }

    pub fn universe(&self) -> &TupleUniverse {
        &self.universe
    }

    pub fn covered_count(&self) -> u64 {
        self.covered.len() as u64
    }

    /// How many tuples of `candidate` are not yet covered.
    pub fn new_coverage_count(&self, candidate: &Permutation) -> u64 {
        self.check_len(candidate);
        let mut count = 0;
        self.universe.for_each_key(candidate, |key| {
            if !self.covered.contains(&key) {
                count += 1;
            }
        });
        count
    }

    /// Mark every tuple of `candidate` covered and return how many were new.
    pub fn commit(&mut self, candidate: &Permutation) -> u64 {
        self.check_len(candidate);
        let mut added = 0;
        let covered = &mut self.covered;
        self.universe.for_each_key(candidate, |key| {
            if covered.insert(key) {
                added += 1;
            }
        });
        tracing::debug!(new_cov = added, covered = covered.len(), "committed permutation");
        added
    }

    pub fn is_covered(&self, tuple: &[Symbol]) -> bool {
        tuple.len() == self.universe.strength().as_usize()
            && tuple.iter().all(|&s| s < self.universe.events())
            && self.covered.contains(&self.universe.key(tuple))
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_for(self.universe.size())
    }

    pub fn is_complete_for(&self, total: u64) -> bool {
        self.covered_count() >= total
    }

    pub fn coverage_ratio(&self) -> f64 {
        self.coverage_ratio_for(self.universe.size())
    }

    pub fn coverage_ratio_for(&self, total: u64) -> f64 {
        if total == 0 {
            return 1.0;
        }
        (self.covered_count() as f64 / total as f64).min(1.0)
    }

    pub fn remaining(&self) -> u64 {
        self.universe.size().saturating_sub(self.covered_count())
    }

    /// Lower-bound estimate of the tests still needed: a permutation holds
    /// at most one of the `t!` orderings of any symbol set.
    pub fn expected_remaining_tests(&self) -> f64 {
        self.remaining() as f64 / self.universe.strength().orderings() as f64
    }

    /// Tuples not covered yet, in lexicographic order.
    pub fn missing_tuples(&self) -> impl Iterator<Item = Vec<Symbol>> + '_ {
        self.universe
            .tuples()
            .filter(move |t| !self.covered.contains(&self.universe.key(t)))
    }

    fn check_len(&self, candidate: &Permutation) {
        assert_eq!(
            candidate.len(),
            self.universe.events(),
            "permutation length must equal the event count"
        );
    }
}
