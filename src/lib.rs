//! Greedy generator for t-way sequence covering arrays.
//!
//! Given `N` events, [`GreedyGenerator`] builds a small set of permutations
//! of `0..N` such that every ordered tuple of `t` distinct events (t = 3 or
//! 4) occurs, in order, as a subsequence of at least one permutation.
//!
//! ```no_run
//! use seqcover::{GeneratorConfig, GreedyGenerator};
//!
//! let config = GeneratorConfig::new(8, 4)?.seed(42);
//! let outcome = GreedyGenerator::new(config)?.generate();
//! assert!(outcome.report.is_complete());
//! # Ok::<(), seqcover::SeqCoverError>(())
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod score;
pub mod tracker;
pub mod types;
pub mod universe;
pub mod verify;

pub use candidate::{best_trial, CandidateSource, ScoredTrial, ShuffleSource};
pub use config::{GeneratorConfig, DEFAULT_MAX_TESTS};
pub use error::{Result, SeqCoverError};
pub use generator::GreedyGenerator;
pub use report::{write_json, write_text, CoverageReport, GenerationOutcome, Progress, SuiteDocument};
pub use score::{default_workers, score_trials};
pub use tracker::CoverageTracker;
pub use types::{Permutation, Strength, Symbol, TerminalState, TupleKey};
pub use universe::{all_tuples, binomial, extract_tuples, universe_size, TupleUniverse};
pub use verify::{audit_document, audit_outcome, audit_sequences, SuiteAudit};
