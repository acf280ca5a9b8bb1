//! Independent audit of a finished suite.
//!
//! The audit does not reuse the tracker: it re-checks every sequence and
//! re-extracts all subsequence tuples into a plain set of tuples, so a
//! reported coverage figure can be confirmed from the sequences alone.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::report::{GenerationOutcome, SuiteDocument};
use crate::types::{Strength, Symbol};
use crate::universe::{all_tuples, extract_tuples, universe_size};

/// How many uncovered tuples an audit lists.
pub const MISSING_SAMPLE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceIssue {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteAudit {
    pub events: usize,
    pub strength: Strength,
    pub sequences: usize,
    pub issues: Vec<SequenceIssue>,
    pub covered: u64,
    pub total: u64,
    /// First few uncovered tuples in lexicographic order.
    pub missing_sample: Vec<Vec<Symbol>>,
}

impl SuiteAudit {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.covered >= self.total
    }

    pub fn coverage_ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.covered as f64 / self.total as f64
        }
    }
}

/// Why `sequence` is not a permutation of `0..events`, if it is not one.
pub fn check_sequence(sequence: &[Symbol], events: usize) -> Option<String> {
    if sequence.len() != events {
        return Some(format!("length {} instead of {events}", sequence.len()));
    }
    let mut seen = HashSet::with_capacity(events);
    for &s in sequence {
        if s >= events {
            return Some(format!("symbol {s} out of range"));
        }
        if !seen.insert(s) {
            return Some(format!("symbol {s} repeated"));
        }
    }
    None
}

/// Audit raw sequences against the `(events, strength)` universe. Invalid
/// sequences are reported and left out of the coverage count.
pub fn audit_sequences(sequences: &[Vec<Symbol>], events: usize, strength: Strength) -> Result<SuiteAudit> {
    let t = strength.as_usize();
    let total = universe_size(events, t)?;

    let mut issues = Vec::new();
    let mut covered: HashSet<Vec<Symbol>> = HashSet::new();
    for (index, seq) in sequences.iter().enumerate() {
        if let Some(reason) = check_sequence(seq, events) {
            issues.push(SequenceIssue { index, reason });
            continue;
        }
        covered.extend(extract_tuples(seq, strength));
    }

    let missing_sample = if covered.len() as u64 >= total {
        Vec::new()
    } else {
        all_tuples(events, t)?
            .filter(|tuple| !covered.contains(tuple))
            .take(MISSING_SAMPLE)
            .collect()
    };

    Ok(SuiteAudit {
        events,
        strength,
        sequences: sequences.len(),
        issues,
        covered: covered.len() as u64,
        total,
        missing_sample,
    })
}

pub fn audit_document(doc: &SuiteDocument) -> Result<SuiteAudit> {
    audit_sequences(&doc.sequences, doc.report.events, doc.report.strength)
}

pub fn audit_outcome(outcome: &GenerationOutcome) -> Result<SuiteAudit> {
    audit_document(&outcome.to_document())
}
