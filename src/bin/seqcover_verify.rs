use clap::Parser;
use seqcover::{audit_document, SuiteDocument};
use std::{fs::File, io::BufReader, path::PathBuf, process};

/// Re-check a suite written by `seqcover --format json`.
#[derive(Parser)]
struct Args {
    /// Suite document to audit
    path: PathBuf,
    /// Print the audit as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let doc = SuiteDocument::read_from(BufReader::new(File::open(&args.path)?))?;
    let audit = audit_document(&doc)?;
    let agrees = audit.covered == doc.report.covered_count;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    } else {
        println!(
            "{} sequences, N={} t={}: covered {}/{} = {:.6}",
            audit.sequences,
            audit.events,
            audit.strength,
            audit.covered,
            audit.total,
            audit.coverage_ratio()
        );
        for issue in &audit.issues {
            println!("invalid sequence #{}: {}", issue.index, issue.reason);
        }
        for tuple in &audit.missing_sample {
            println!("missing: {:?}", tuple);
        }
        if !agrees {
            println!(
                "report claims {} covered tuples, audit found {}",
                doc.report.covered_count, audit.covered
            );
        }
    }

    if !(audit.is_valid() && audit.is_complete() && agrees) {
        process::exit(1);
    }
    Ok(())
}
