//! CLI argument definitions for the record-linkage preprocessor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "linkage-prep",
    version,
    about = "Normalize messy person datasets into one canonical schema",
    long_about = "Normalize person records from three independently sourced tabular\n\
                  datasets into one canonical schema for record linkage.\n\n\
                  Names are split into first/middle/last, phone numbers are repaired\n\
                  and formatted internationally, emails are validated, partial dates\n\
                  are widened to YYYY-MM-DD and addresses are whitespace-collapsed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize the three source datasets and write the canonical CSV.
    Run(RunArgs),

    /// List the three source schemas and their column layouts.
    Schemas,
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory holding the source CSV files (main1.csv, main2.csv, main3.csv).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output CSV path (default: <DATA_DIR>/output/linked.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Default region for phone numbers without an explicit dialing prefix.
    #[arg(long = "region", default_value = "RU")]
    pub region: String,

    /// Records per processing chunk.
    #[arg(long = "chunk-size", default_value_t = 1000)]
    pub chunk_size: usize,

    /// Process the datasets one after another instead of in parallel workers.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Process and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
