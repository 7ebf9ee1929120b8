//! Command line argument parsing for the narrative exporter using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_OUTPUT_DIR, ExportConfig, FailurePolicy, parse_delimiter};

/// narrative-export - convert narrative tables into upload documents
#[derive(Parser, Debug, Clone)]
#[command(name = "narrative-export")]
#[command(about = "Convert misinformation narrative tables into document-upload JSON files")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct ExportArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ExportArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write one upload document per table row
    Convert(ConvertArgs),

    /// Check that every row maps cleanly, without writing files
    Validate(ValidateArgs),

    /// Print the upload document of a single row
    Preview(PreviewArgs),
}

/// Options shared by every command that reads the input table.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Input table (CSV with id, Narrative, Fakes, Debunking columns)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cell delimiter (single ASCII character, or "tab")
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Trim whitespace around cells
    #[arg(long)]
    pub trim: bool,
}

/// Arguments for converting a table
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Directory receiving the JSON files
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "NARRATIVE_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Skip rows that fail and report them at the end instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

impl ConvertArgs {
    pub fn to_config(&self) -> ExportConfig {
        self.table
            .to_config()
            .with_output_dir(&self.output_dir)
            .with_failure_policy(failure_policy(self.keep_going))
    }
}

/// Arguments for validating a table
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Report every failing row instead of stopping at the first
    #[arg(long)]
    pub keep_going: bool,
}

impl ValidateArgs {
    pub fn to_config(&self) -> ExportConfig {
        self.table
            .to_config()
            .with_dry_run(true)
            .with_failure_policy(failure_policy(self.keep_going))
    }
}

/// Arguments for previewing one row
#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Data row to preview (1-based, header excluded)
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub row: u64,
}

impl TableArgs {
    pub fn to_config(&self) -> ExportConfig {
        ExportConfig::new(&self.input)
            .with_delimiter(self.delimiter)
            .with_trim(self.trim)
    }
}

fn failure_policy(keep_going: bool) -> FailurePolicy {
    if keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::FailFast
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
