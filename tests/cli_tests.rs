use std::fs;
use std::process::Command;

use seqcover::{SuiteDocument, TerminalState};

#[test]
fn json_suite_roundtrips_through_verifier() {
    let exe = env!("CARGO_BIN_EXE_seqcover");
    let verify = env!("CARGO_BIN_EXE_seqcover-verify");
    let dir = tempfile::tempdir().unwrap();
    let suite = dir.path().join("suite.json");

    let status = Command::new(exe)
        .args(["6", "--strength", "4", "--seed", "7", "--format", "json", "--output"])
        .arg(&suite)
        .status()
        .expect("seqcover failed to start");
    assert!(status.success());

    let doc = SuiteDocument::read_from(fs::File::open(&suite).unwrap()).unwrap();
    assert_eq!(doc.report.terminal_state, TerminalState::Complete);
    assert_eq!(doc.report.total_universe_size, 360);
    assert_eq!(doc.sequences.len(), doc.report.tests);

    let status = Command::new(verify).arg(&suite).status().expect("verify failed to start");
    assert!(status.success());
}

#[test]
fn verifier_rejects_tampered_suite() {
    let exe = env!("CARGO_BIN_EXE_seqcover");
    let verify = env!("CARGO_BIN_EXE_seqcover-verify");
    let dir = tempfile::tempdir().unwrap();
    let suite = dir.path().join("suite.json");

    let status = Command::new(exe)
        .args(["5", "-t", "3", "--seed", "1", "--format", "json", "-o"])
        .arg(&suite)
        .status()
        .unwrap();
    assert!(status.success());

    let mut doc = SuiteDocument::read_from(fs::File::open(&suite).unwrap()).unwrap();
    doc.sequences.truncate(2);
    fs::write(&suite, serde_json::to_vec(&doc).unwrap()).unwrap();

    let status = Command::new(verify).arg(&suite).status().unwrap();
    assert!(!status.success());
}

#[test]
fn text_output_has_summary_line() {
    let exe = env!("CARGO_BIN_EXE_seqcover");
    let output = Command::new(exe)
        .args(["5", "-t", "3", "--seed", "3", "--workers", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert!(first.starts_with("==== ") && first.ends_with(" TESTS ===="));
    assert!(stdout.lines().nth(1).unwrap().ends_with(','));
    let last = stdout.lines().last().unwrap();
    assert!(last.contains("Seqs covered: 60/NSEQ: 60 = 1.000000"), "{last}");
}

#[test]
fn rejects_unsupported_strength() {
    let exe = env!("CARGO_BIN_EXE_seqcover");
    let status = Command::new(exe).args(["6", "-t", "5"]).status().unwrap();
    assert!(!status.success());
}
