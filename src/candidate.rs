//! Trial permutations and the best-of-batch selection rule.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::Permutation;

/// Supplies the trial permutations of each iteration.
///
/// Implementations must return a permutation of exactly `events` symbols.
pub trait CandidateSource {
    fn next_candidate(&mut self, events: usize) -> Permutation;
}

impl<F> CandidateSource for F
where
    F: FnMut(usize) -> Permutation,
{
    fn next_candidate(&mut self, events: usize) -> Permutation {
        self(events)
    }
}

/// Uniform random permutations via an in-place Fisher–Yates shuffle.
#[derive(Debug, Clone)]
pub struct ShuffleSource<R> {
    rng: R,
}

impl ShuffleSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ShuffleSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CandidateSource for ShuffleSource<R> {
    fn next_candidate(&mut self, events: usize) -> Permutation {
        let mut symbols: Vec<usize> = (0..events).collect();
        symbols.shuffle(&mut self.rng);
        Permutation::from_shuffled(symbols)
    }
}

/// Score of one trial within its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredTrial {
    /// Position of the trial in generation order.
    pub index: usize,
    /// Tuples the trial would newly cover.
    pub score: u64,
}

/// Pick the trial with the strictly greatest score; ties go to the earliest
/// trial. Returns `None` for an empty batch.
pub fn best_trial(scores: &[u64]) -> Option<ScoredTrial> {
    let mut best: Option<ScoredTrial> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some(b) if score <= b.score => {}
            _ => best = Some(ScoredTrial { index, score }),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_to_first_trial() {
        let best = best_trial(&[3, 7, 2, 7, 7]).unwrap();
        assert_eq!(best, ScoredTrial { index: 1, score: 7 });
    }

    #[test]
    fn all_zero_batch_reports_zero() {
        let best = best_trial(&[0, 0, 0]).unwrap();
        assert_eq!(best, ScoredTrial { index: 0, score: 0 });
        assert!(best_trial(&[]).is_none());
    }

    #[test]
    fn shuffle_source_is_deterministic_and_valid() {
        let mut a = ShuffleSource::seeded(42);
        let mut b = ShuffleSource::seeded(42);
        for _ in 0..20 {
            let pa = a.next_candidate(9);
            assert_eq!(pa, b.next_candidate(9));
            let mut sorted = pa.into_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn closures_are_sources() {
        let mut source = |n: usize| Permutation::descending(n);
        assert_eq!(source.next_candidate(3).as_slice(), &[2, 1, 0]);
    }
}
