//! Greedy best-of-trials construction of a sequence covering array.
//!
//! The run seeds the suite with the ascending and descending permutations,
//! then repeatedly draws a batch of trial permutations, keeps the one that
//! covers the most new tuples and optionally its reverse. It stops when the
//! universe is covered ([`TerminalState::Complete`]), when the suite reaches
//! `max_tests` ([`TerminalState::Exhausted`]) or when a whole batch adds
//! nothing ([`TerminalState::Stalled`]).

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::candidate::{best_trial, CandidateSource, ShuffleSource};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::report::{CoverageReport, GenerationOutcome, Progress};
use crate::score::score_trials;
use crate::tracker::CoverageTracker;
use crate::types::{Permutation, TerminalState};
use crate::universe::TupleUniverse;

pub struct GreedyGenerator<S = ShuffleSource<StdRng>> {
    config: GeneratorConfig,
    tracker: CoverageTracker,
    suite: Vec<Permutation>,
    source: S,
    iterations: usize,
}

impl GreedyGenerator {
    /// Generator drawing uniform random trials from a `StdRng` seeded with
    /// `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let source = ShuffleSource::seeded(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: CandidateSource> GreedyGenerator<S> {
    pub fn with_source(config: GeneratorConfig, source: S) -> Result<Self> {
        config.validate()?;
        let universe = TupleUniverse::new(config.events, config.strength)?;
        Ok(Self {
            config,
            tracker: CoverageTracker::new(universe),
            suite: Vec::new(),
            source,
            iterations: 0,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(self) -> GenerationOutcome {
        self.generate_with(|_| {})
    }

    /// Run to a terminal state, reporting progress after seeding and after
    /// every iteration.
    pub fn generate_with(mut self, mut observer: impl FnMut(&Progress)) -> GenerationOutcome {
        info!(
            events = self.config.events,
            strength = %self.config.strength,
            universe = self.tracker.universe().size(),
            trials = self.config.trials_per_iteration,
            reversal = self.config.use_reversal,
            seed = self.config.seed,
            "generating test sequences"
        );

        let seeded = self.seed_suite();
        observer(&self.progress(seeded));

        let state = loop {
            if self.tracker.is_complete() {
                break TerminalState::Complete;
            }
            if self.suite.len() >= self.config.max_tests {
                break TerminalState::Exhausted;
            }
            match self.iterate() {
                Some(gained) => observer(&self.progress(gained)),
                None => break TerminalState::Stalled,
            }
        };

        let report = CoverageReport {
            events: self.config.events,
            strength: self.config.strength,
            covered_count: self.tracker.covered_count(),
            total_universe_size: self.tracker.universe().size(),
            coverage_ratio: self.tracker.coverage_ratio(),
            terminal_state: state,
            tests: self.suite.len(),
            iterations: self.iterations,
        };
        info!(
            tests = report.tests,
            covered = report.covered_count,
            total = report.total_universe_size,
            state = %state,
            "generation finished"
        );
        GenerationOutcome {
            sequences: self.suite,
            report,
        }
    }

    fn seed_suite(&mut self) -> u64 {
        let n = self.config.events;
        let mut gained = 0;
        for seed in [Permutation::identity(n), Permutation::descending(n)] {
            if self.suite.len() >= self.config.max_tests {
                break;
            }
            gained += self.accept(seed);
        }
        gained
    }

    /// One batch of trials. `None` when no trial adds coverage.
    fn iterate(&mut self) -> Option<u64> {
        self.iterations += 1;
        let n = self.config.events;
        let trials: Vec<Permutation> = (0..self.config.trials_per_iteration)
            .map(|_| self.source.next_candidate(n))
            .collect();
        let scores = score_trials(&self.tracker, &trials, self.config.workers);
        let best = best_trial(&scores)?;
        if best.score == 0 {
            debug!(iteration = self.iterations, "no trial adds coverage");
            return None;
        }

        let winner = trials.into_iter().nth(best.index)?;
        let reverse = winner.reversed();
        let mut gained = self.accept(winner);

        if self.config.use_reversal
            && self.suite.len() < self.config.max_tests
            && !self.tracker.is_complete()
            && self.tracker.new_coverage_count(&reverse) > 0
        {
            gained += self.accept(reverse);
        }

        debug!(
            iteration = self.iterations,
            covered = self.tracker.covered_count(),
            remain = self.tracker.remaining(),
            expect = self.tracker.expected_remaining_tests(),
            "iteration done"
        );
        Some(gained)
    }

    fn accept(&mut self, permutation: Permutation) -> u64 {
        let gained = self.tracker.commit(&permutation);
        self.suite.push(permutation);
        gained
    }

    fn progress(&self, gained: u64) -> Progress {
        Progress {
            iteration: self.iterations,
            tests: self.suite.len(),
            covered: self.tracker.covered_count(),
            total: self.tracker.universe().size(),
            gained,
            expected_remaining: self.tracker.expected_remaining_tests(),
        }
    }
}
