use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use seqcover::{
    default_workers, universe_size, write_json, write_text, GeneratorConfig, GreedyGenerator,
    DEFAULT_MAX_TESTS,
};

#[derive(Clone, Copy, ValueEnum)]
enum Reversal {
    /// Enabled when there are more than five events
    Auto,
    On,
    Off,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Generate a t-way sequence covering array over N events.
#[derive(Parser)]
#[command(name = "seqcover", version)]
struct Args {
    /// Number of events
    events: usize,
    /// Tuple strength (3 or 4)
    #[arg(short = 't', long, default_value_t = 4)]
    strength: usize,
    /// Trial permutations per iteration [default: 100 for t=3, 1000 for t=4]
    #[arg(long)]
    trials: Option<usize>,
    /// Maximum number of test sequences, seeds included
    #[arg(long, default_value_t = DEFAULT_MAX_TESTS)]
    max_tests: usize,
    /// Random seed [default: derived from the clock]
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Reversal::Auto)]
    reversal: Reversal,
    /// Scoring threads [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write the suite here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Show a coverage progress bar
    #[arg(long)]
    progress: bool,
    /// Log generation events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let seed = args.seed.unwrap_or_else(|| {
        let seed = clock_seed();
        eprintln!("seed: {seed}");
        seed
    });

    let mut config = GeneratorConfig::new(args.events, args.strength)?
        .max_tests(args.max_tests)
        .seed(seed)
        .workers(args.workers.unwrap_or_else(default_workers));
    if let Some(trials) = args.trials {
        config = config.trials(trials);
    }
    match args.reversal {
        Reversal::Auto => {}
        Reversal::On => config = config.reversal(true),
        Reversal::Off => config = config.reversal(false),
    }

    let generator = GreedyGenerator::new(config)?;
    let outcome = if args.progress {
        let bar = ProgressBar::new(universe_size(args.events, args.strength)?);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} tuples {msg} [{elapsed_precise}]",
        )?);
        let outcome = generator.generate_with(|p| {
            bar.set_position(p.covered);
            bar.set_message(format!("{} tests, expect {:.1} more", p.tests, p.expected_remaining));
        });
        bar.finish_and_clear();
        outcome
    } else {
        generator.generate()
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Text => write_text(&outcome, &mut out)?,
        Format::Json => write_json(&outcome, &mut out)?,
    }
    out.flush()?;

    if !outcome.report.is_complete() {
        eprintln!(
            "warning: coverage incomplete ({}): {}/{} tuples",
            outcome.report.terminal_state,
            outcome.report.covered_count,
            outcome.report.total_universe_size
        );
    }
    Ok(())
}
