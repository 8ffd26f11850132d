use clap::Parser;
use std::path::PathBuf;

use primefac::types::OutputFormat;

/// Factored when no values are given on the command line.
pub const SAMPLE_VALUE: i64 = 1_000_000_000;

#[derive(Parser)]
#[command(name = "primefac", version, about = "PRIMEFAC CLI")]
pub struct CliArgs {
    /// Values to factor; with none given, the built-in sample value is factored
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Input file containing whitespace-separated values (batch mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format (plain or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with the remaining values when one fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}
