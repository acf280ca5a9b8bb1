//! Run results and their text/JSON renderings.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Permutation, Strength, Symbol, TerminalState};

/// Coverage summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub events: usize,
    pub strength: Strength,
    pub covered_count: u64,
    pub total_universe_size: u64,
    pub coverage_ratio: f64,
    pub terminal_state: TerminalState,
    /// Permutations in the suite, seeds included.
    pub tests: usize,
    /// Trial batches evaluated after seeding.
    pub iterations: usize,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.terminal_state.is_complete()
    }
}

/// Snapshot handed to progress observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub iteration: usize,
    pub tests: usize,
    pub covered: u64,
    pub total: u64,
    /// Tuples added by the most recent iteration (seeds for iteration 0).
    pub gained: u64,
    /// `remaining / t!`, a lower bound on the tests still needed.
    pub expected_remaining: f64,
}

/// The suite produced by [`crate::GreedyGenerator::generate`] plus its report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutcome {
    pub sequences: Vec<Permutation>,
    pub report: CoverageReport,
}

impl GenerationOutcome {
    pub fn terminal_state(&self) -> TerminalState {
        self.report.terminal_state
    }

    pub fn coverage_ratio(&self) -> f64 {
        self.report.coverage_ratio
    }

    pub fn to_document(&self) -> SuiteDocument {
        SuiteDocument {
            report: self.report.clone(),
            sequences: self.sequences.iter().map(|p| p.to_vec()).collect(),
        }
    }
}

/// On-disk JSON form of a suite.
///
/// Sequences are kept as raw vectors so that a damaged file can still be
/// loaded and audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteDocument {
    pub report: CoverageReport,
    pub sequences: Vec<Vec<Symbol>>,
}

impl SuiteDocument {
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Plain-text layout: a header, one comma-terminated line per permutation and
/// a summary line.
pub fn write_text<W: Write>(outcome: &GenerationOutcome, out: &mut W) -> Result<()> {
    let report = &outcome.report;
    writeln!(out, "==== {} TESTS ====", outcome.sequences.len())?;
    for seq in &outcome.sequences {
        for s in seq.iter() {
            write!(out, "{s},")?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "Tests: {}. Seqs covered: {}/NSEQ: {} = {:.6}",
        report.tests, report.covered_count, report.total_universe_size, report.coverage_ratio
    )?;
    Ok(())
}

pub fn write_json<W: Write>(outcome: &GenerationOutcome, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &outcome.to_document())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationOutcome {
        GenerationOutcome {
            sequences: vec![Permutation::identity(4), Permutation::descending(4)],
            report: CoverageReport {
                events: 4,
                strength: Strength::Three,
                covered_count: 8,
                total_universe_size: 24,
                coverage_ratio: 8.0 / 24.0,
                terminal_state: TerminalState::Exhausted,
                tests: 2,
                iterations: 0,
            },
        }
    }

    #[test]
    fn text_layout() {
        let mut buf = Vec::new();
        write_text(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "==== 2 TESTS ====\n0,1,2,3,\n3,2,1,0,\nTests: 2. Seqs covered: 8/NSEQ: 24 = 0.333333\n"
        );
    }

    #[test]
    fn json_document_reads_back() {
        let outcome = sample();
        let mut buf = Vec::new();
        write_json(&outcome, &mut buf).unwrap();
        let doc = SuiteDocument::read_from(buf.as_slice()).unwrap();
        assert_eq!(doc, outcome.to_document());
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"terminal_state\": \"exhausted\""));
        assert!(text.contains("\"strength\": 3"));
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let err = SuiteDocument::read_from("{\"report\": 1}".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::SeqCoverError::Json(_)));
    }
}
