use crate::error::{Result, SeqCoverError};
use crate::types::Strength;

/// Default cap on the number of permutations in a suite.
pub const DEFAULT_MAX_TESTS: usize = 10_000;

/// Runtime parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of events `N`.
    pub events: usize,
    /// Tuple strength `t`.
    pub strength: Strength,
    /// Hard cap on suite length, seed permutations included.
    pub max_tests: usize,
    /// Trial permutations drawn and scored per iteration.
    pub trials_per_iteration: usize,
    /// Also append the reverse of each accepted permutation when it adds
    /// coverage.
    pub use_reversal: bool,
    /// Seed of the default random candidate source.
    pub seed: u64,
    /// Threads used to score a batch of trials.
    pub workers: usize,
}

impl GeneratorConfig {
    /// Defaults for `events` at strength `t`: 100 trials per iteration for
    /// t=3, 1000 for t=4, and reversal when there are more than five events.
    pub fn new(events: usize, t: usize) -> Result<Self> {
        let strength = Strength::try_from(t)?;
        let config = Self {
            events,
            strength,
            max_tests: DEFAULT_MAX_TESTS,
            trials_per_iteration: default_trials(strength),
            use_reversal: events > 5,
            seed: 0,
            workers: 1,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn max_tests(mut self, max_tests: usize) -> Self {
        self.max_tests = max_tests;
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials_per_iteration = trials;
        self
    }

    pub fn reversal(mut self, enabled: bool) -> Self {
        self.use_reversal = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.events < self.strength.as_usize() {
            return Err(SeqCoverError::invalid(format!(
                "need at least {} events for strength {}, got {}",
                self.strength, self.strength, self.events
            )));
        }
        if self.max_tests == 0 {
            return Err(SeqCoverError::invalid("max_tests must be positive"));
        }
        if self.trials_per_iteration == 0 {
            return Err(SeqCoverError::invalid("trials_per_iteration must be positive"));
        }
        if self.workers == 0 {
            return Err(SeqCoverError::invalid("workers must be positive"));
        }
        Ok(())
    }
}

fn default_trials(strength: Strength) -> usize {
    match strength {
        Strength::Three => 100,
        Strength::Four => 1000,
    }
}
