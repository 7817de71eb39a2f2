//! Wavesense CLI: evaluates hardware mental models against waveform evidence.
//!
//! Provides `wavesense eval` for scoring an artifacts directory,
//! `wavesense check` for running every behaviour check on one dump,
//! `wavesense wavejson` for converting a dump to WaveDrom input, and
//! `wavesense coverage` for summarizing an LCOV tracefile.

#![warn(missing_docs)]

mod check;
mod coverage;
mod eval;
mod pipeline;
mod wavejson;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wavesense: mental-model evaluation for RTL designs.
#[derive(Parser, Debug)]
#[command(name = "wavesense", version, about = "Wavesense mental-model evaluator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `wavesense.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a mental model against its cited waveforms.
    Eval(EvalArgs),
    /// Run every behaviour check against one waveform dump.
    Check(CheckArgs),
    /// Convert a waveform dump to WaveDrom WaveJSON.
    Wavejson(WaveJsonArgs),
    /// Summarize line and branch coverage from an LCOV file.
    Coverage(CoverageArgs),
}

/// Arguments for the `wavesense eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Directory holding the mental model, hypotheses and `waves/`.
    #[arg(default_value = "temp_artifacts")]
    pub artifacts: PathBuf,

    /// Where to write the JSON report (default: inside ARTIFACTS).
    #[arg(long)]
    pub out_json: Option<PathBuf>,

    /// Where to write the Markdown report (default: inside ARTIFACTS).
    #[arg(long)]
    pub out_md: Option<PathBuf>,

    /// Claim categories to skip (e.g., `--allow wraparound`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// What to print on stdout.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `wavesense check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The waveform table to check.
    pub wave: PathBuf,

    /// Counter bit width (overrides `checks.width`).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub width: Option<u32>,

    /// Claim categories to skip.
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,
}

/// Arguments for the `wavesense wavejson` subcommand.
#[derive(Parser, Debug)]
pub struct WaveJsonArgs {
    /// The waveform table to convert.
    pub wave: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Diagram title; an empty title omits the head block.
    #[arg(short, long, default_value = "Waveform")]
    pub title: String,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `wavesense coverage` subcommand.
#[derive(Parser, Debug)]
pub struct CoverageArgs {
    /// The LCOV tracefile, e.g. `coverage.info`.
    pub info: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Eval(ref args) => eval::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Wavejson(ref args) => wavejson::run(args, &global),
        Command::Coverage(ref args) => coverage::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
