//! Batch scoring across worker threads.
//!
//! Scoring only reads the tracker, so the batch is split into contiguous
//! chunks scored on scoped threads. Scores come back in trial order and the
//! result is identical for any worker count.

use std::thread;

use crate::tracker::CoverageTracker;
use crate::types::Permutation;

/// New-coverage score of every trial, in trial order.
pub fn score_trials(tracker: &CoverageTracker, trials: &[Permutation], workers: usize) -> Vec<u64> {
    let workers = workers.clamp(1, trials.len().max(1));
    if workers == 1 {
        return trials.iter().map(|p| tracker.new_coverage_count(p)).collect();
    }

    let chunk = trials.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = trials
            .chunks(chunk)
            .map(|part| {
                scope.spawn(move || {
                    part.iter()
                        .map(|p| tracker.new_coverage_count(p))
                        .collect::<Vec<u64>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(scores) => scores,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// Worker count to use when the caller does not choose one.
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{CandidateSource, ShuffleSource};
    use crate::types::Strength;
    use crate::universe::TupleUniverse;

    #[test]
    fn parallel_scores_match_sequential() {
        let mut tracker = CoverageTracker::new(TupleUniverse::new(8, Strength::Four).unwrap());
        tracker.commit(&Permutation::identity(8));
        tracker.commit(&Permutation::descending(8));
        let mut source = ShuffleSource::seeded(7);
        let trials: Vec<Permutation> = (0..37).map(|_| source.next_candidate(8)).collect();

        let sequential = score_trials(&tracker, &trials, 1);
        for workers in [2, 3, 8, 64] {
            assert_eq!(score_trials(&tracker, &trials, workers), sequential);
        }
    }

    #[test]
    fn empty_batch_scores_nothing() {
        let tracker = CoverageTracker::new(TupleUniverse::new(4, Strength::Three).unwrap());
        assert!(score_trials(&tracker, &[], 4).is_empty());
    }

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }
}
