use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use vokabel_extract::{Collation, ExtractConfig, Extractor, ScanRegion};
use vokabel_io::csv::CsvFormat;
use vokabel_io::provider::{FileProvider, PathListProvider, PromptProvider};
use vokabel_model::{Lexicon, Strictness};

const PREVIEW_LEN: usize = 5;

#[derive(Parser)]
#[command(name = "vokabel")]
#[command(about = "Extract German/Portuguese vocabulary pairs from copied vocabulary pages into a CSV")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Text files to process (without any, an interactive selection prompt opens)
    inputs: Vec<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "alle_vokabeln.csv")]
    output: PathBuf,

    /// Open the interactive file selection even when files are given
    #[arg(short, long)]
    gui: bool,

    /// Pairing rule; defaults to heuristic-with-fallback, or alternating with --markers
    #[arg(long, value_enum)]
    strictness: Option<StrictnessArg>,

    /// Only scan text between the save-instructions sentence and the page-size selector
    #[arg(long)]
    markers: bool,

    /// Keep duplicates and input order instead of de-duplicating and sorting
    #[arg(long)]
    keep_duplicates: bool,

    /// Column delimiter
    #[arg(long, value_enum, default_value = "semicolon")]
    delimiter: Delimiter,

    /// Omit the "Deutsch;Portugiesisch" header row
    #[arg(long)]
    no_header: bool,

    /// JSON lexicon profile overriding keywords, markers, and thresholds
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Also write a JSON run report (per-file counts, low-confidence pairs)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrictnessArg {
    /// Every two adjacent lines are a pair, Portuguese first
    Alternating,
    /// First line must look Portuguese (lowercase, article, or diacritic)
    Heuristic,
    /// Article/diacritic evidence on both lines, else short keyword-free lines
    Fallback,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Alternating => Strictness::Alternating,
            StrictnessArg::Heuristic => Strictness::Heuristic,
            StrictnessArg::Fallback => Strictness::HeuristicWithFallback,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Delimiter {
    Semicolon,
    Comma,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries only the pair preview
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

/// Pick the scan region and pairing rule from the flags.
fn resolve_config(cli: &Cli, lexicon: Lexicon) -> ExtractConfig {
    let region = if cli.markers { ScanRegion::Marked } else { ScanRegion::Document };
    let strictness = match (cli.strictness, region) {
        (Some(arg), ScanRegion::Marked) => {
            let chosen = Strictness::from(arg);
            if chosen != Strictness::Alternating {
                tracing::warn!(
                    strictness = %chosen,
                    "Marker-bounded pages are normally paired by fixed alternation"
                );
            }
            chosen
        }
        (Some(arg), ScanRegion::Document) => arg.into(),
        (None, ScanRegion::Marked) => Strictness::Alternating,
        (None, ScanRegion::Document) => Strictness::default(),
    };
    ExtractConfig { strictness, region, lexicon }
}

fn csv_format(cli: &Cli) -> CsvFormat {
    let format = match cli.delimiter {
        Delimiter::Semicolon => CsvFormat::default(),
        Delimiter::Comma => CsvFormat::comma(),
    };
    if cli.no_header { format.without_header() } else { format }
}

/// How a run ended; everything but `Written` exits with status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Written,
    NoFilesSelected,
    NoValidFiles,
    NoPairs,
    WriteFailed,
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Written => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let outcome = if cli.gui || cli.inputs.is_empty() {
        tracing::info!("Opening interactive file selection");
        run_with(&cli, &mut PromptProvider::stdio())?
    } else {
        run_with(&cli, &mut PathListProvider::new(cli.inputs.clone()))?
    };
    Ok(outcome.into())
}

fn run_with(cli: &Cli, provider: &mut dyn FileProvider) -> Result<RunOutcome> {
    let paths = provider.provide()?;
    if paths.is_empty() {
        tracing::error!("No files selected, aborting");
        return Ok(RunOutcome::NoFilesSelected);
    }

    let check = vokabel_io::provider::validate_paths(&paths);
    if check.valid.is_empty() {
        tracing::error!("No valid input files found");
        return Ok(RunOutcome::NoValidFiles);
    }

    // Configure the extractor
    let lexicon = match &cli.lexicon {
        Some(path) => vokabel_io::lexicon::load_lexicon(path)?,
        None => Lexicon::default(),
    };
    let extractor = Extractor::new(resolve_config(cli, lexicon))
        .context("Failed to build extractor")?;
    let collation = if cli.keep_duplicates { Collation::Raw } else { Collation::UniqueSorted };

    tracing::info!(
        files = check.valid.len(),
        strictness = %extractor.strictness(),
        region = ?extractor.region(),
        "Processing input files"
    );

    let batch = vokabel_io::batch::process_files(&check.valid, &extractor, collation);
    let aggregate = &batch.aggregate;

    tracing::info!(total = aggregate.total, "Pairs extracted");
    if collation == Collation::UniqueSorted {
        tracing::info!(
            duplicates_removed = aggregate.duplicates_removed,
            unique = aggregate.pairs.len(),
            "Removed duplicates"
        );
    }
    if aggregate.low_confidence > 0 {
        tracing::warn!(
            pairs = aggregate.low_confidence,
            "Line order of some pairs was guessed without article/diacritic/case evidence; review them"
        );
    }

    let outcome = if aggregate.pairs.is_empty() {
        tracing::error!("No vocabulary pairs found, no CSV written");
        RunOutcome::NoPairs
    } else {
        match vokabel_io::csv::write_csv(&aggregate.pairs, &cli.output, &csv_format(cli)) {
            Ok(()) => RunOutcome::Written,
            Err(e) => {
                tracing::error!("{e}");
                RunOutcome::WriteFailed
            }
        }
    };
    let wrote_csv = outcome == RunOutcome::Written;

    if let Some(report_path) = &cli.report {
        let output = wrote_csv.then_some(cli.output.as_path());
        let summary = vokabel_io::report::RunSummary::new(
            &batch,
            &check.missing,
            extractor.strictness(),
            extractor.region(),
            output,
        );
        if let Err(e) = vokabel_io::report::write_report(&summary, report_path) {
            tracing::error!("{e}");
            return Ok(RunOutcome::WriteFailed);
        }
    }

    if !wrote_csv {
        return Ok(outcome);
    }

    println!("Preview (first {PREVIEW_LEN} pairs):");
    for (i, pair) in aggregate.pairs.preview(PREVIEW_LEN).iter().enumerate() {
        println!("{}. {} | {}", i + 1, pair.german, pair.portuguese);
    }

    Ok(RunOutcome::Written)
}
