//! CLI argument definitions for the de-identification tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::commands::MAX_UPLOAD_BYTES;

#[derive(Parser)]
#[command(
    name = "deid",
    version,
    about = "Scrub protected identifiers out of spreadsheet exports",
    long_about = "Replace identifying cells in xlsx/xls exports with stable,\n\
                  deterministic surrogate tokens while preserving sheet\n\
                  structure and all non-identifying values."
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

    /// Allow sensitive values (the subject key) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Anonymize a spreadsheet export.
    Anonymize(AnonymizeArgs),

    /// List the header keywords that flag a column for masking.
    Keywords,
}

#[derive(Parser)]
pub struct AnonymizeArgs {
    /// Path to the spreadsheet to sanitize (.xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for the sanitized file (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// External subject key for the whole upload (e.g. a wallet address).
    #[arg(long = "subject-key", value_name = "KEY")]
    pub subject_key: Option<String>,

    /// Collapse sheets without an identifier column to the subject
    /// key's identity instead of one random identity per row.
    #[arg(long = "collapse-unkeyed", requires = "subject_key")]
    pub collapse_unkeyed: bool,

    /// Upload size ceiling in bytes.
    #[arg(long = "max-bytes", value_name = "BYTES", default_value_t = MAX_UPLOAD_BYTES)]
    pub max_bytes: u64,
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
