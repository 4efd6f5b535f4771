//! cinedeck CLI
//!
//! Present, check and export the Kukje Cinema course deck.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use humansize::{format_size, BINARY};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use cinedeck::deck::Deck;
use cinedeck::error::MediaError;
use cinedeck::logging::{default_log_path, init_file_logger, init_stderr_logger};
use cinedeck::media::{MediaProbe, UriProbe};
use cinedeck::report::{assemble_report, format_report};
use cinedeck::types::{OutputFormat, PortfolioSample, PresentConfig};

#[derive(Parser)]
#[command(name = "cinedeck")]
#[command(about = "Cinema-themed slide deck for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Present the deck full-screen
    Present {
        /// Deck file (JSON). Default: the built-in course deck
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Slide number to open on, starting at 1
        #[arg(long, default_value_t = 1)]
        start: usize,

        /// Log file (default: cache dir)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Validate a deck and check every portfolio media source
    Check {
        /// Deck file (JSON). Default: the built-in course deck
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the built-in deck as JSON
    Export,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Present { deck, start, log_file } => cmd_present(deck, start, log_file),
        Commands::Check { deck, format } => cmd_check(deck, format.into()),
        Commands::Export => cmd_export(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// DECK RESOLUTION
// ============================================================================

/// Load the deck file, or fall back to the built-in deck.
fn load_deck(path: Option<&Path>) -> Result<Deck, String> {
    let deck = match path {
        Some(p) => Deck::load(p),
        None => Deck::built_in(),
    };
    deck.map_err(|e| e.to_string())
}

// ============================================================================
// PROGRESS HELPERS
// ============================================================================

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.red} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.red} [{bar:40.red/yellow}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(msg.to_string());
    pb
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(deck: Option<PathBuf>, start: usize, log_file: Option<PathBuf>) -> Result<(), String> {
    let log_path = log_file.unwrap_or_else(default_log_path);
    init_file_logger(&log_path)
        .map_err(|e| format!("Cannot open log file {}: {}", log_path.display(), e))?;

    let config = PresentConfig {
        deck_path: deck,
        start_index: start.saturating_sub(1),
        ..Default::default()
    };

    let deck = load_deck(config.deck_path.as_deref())?;
    info!("loaded deck '{}' ({} slides)", deck.info().title, deck.len());

    cinedeck::tui::run(deck, &config).map_err(|e| e.to_string())
}

fn cmd_check(deck: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    init_stderr_logger();

    let show_progress = format == OutputFormat::Human;

    // Phase 1: Load and validate
    let deck = if show_progress {
        let sp = spinner("Validating deck...");
        match load_deck(deck.as_deref()) {
            Ok(d) => {
                sp.finish_with_message(format!("Deck is valid: {} slides", d.len()));
                d
            }
            Err(e) => {
                sp.finish_and_clear();
                return Err(e);
            }
        }
    } else {
        load_deck(deck.as_deref())?
    };

    // Phase 2: Probe media (parallel)
    let samples: Vec<&PortfolioSample> = deck.samples().map(|(_, sample)| sample).collect();
    let results = if show_progress && !samples.is_empty() {
        probe_with_progress(&samples)
    } else {
        probe_all(&samples)
    };

    let report = assemble_report(&deck, results);

    if show_progress {
        eprintln!();
    }
    print!("{}", format_report(&report, format));

    let unavailable = report.unavailable().count();
    if unavailable > 0 {
        return Err(format!(
            "{} of {} media item(s) unavailable",
            unavailable,
            report.media.len()
        ));
    }

    if show_progress && report.local_media_bytes > 0 {
        eprintln!("Local media verified: {}", format_size(report.local_media_bytes, BINARY));
    }

    Ok(())
}

fn cmd_export() -> Result<(), String> {
    let deck = Deck::built_in().map_err(|e| e.to_string())?;
    let json = deck.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

// ============================================================================
// MEDIA PROBING
// ============================================================================

/// Probe with a progress bar (parallel).
fn probe_with_progress(samples: &[&PortfolioSample]) -> Vec<Result<Option<u64>, MediaError>> {
    let pb = progress_bar(samples.len() as u64, "Checking media...");

    let results: Vec<_> = samples
        .par_iter()
        .progress_with(pb.clone())
        .map(|sample| UriProbe.probe(&sample.source, sample.kind))
        .collect();

    pb.finish_with_message("Done");
    results
}

/// Probe without progress (for JSON output).
fn probe_all(samples: &[&PortfolioSample]) -> Vec<Result<Option<u64>, MediaError>> {
    samples
        .par_iter()
        .map(|sample| UriProbe.probe(&sample.source, sample.kind))
        .collect()
}
