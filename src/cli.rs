use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "timestat", version, about = "Range, average and median of hh|mm|ss times")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub stat: StatArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute range, average and median of a list of times
    Stat(StatArgs),
    /// Convert hh|mm|ss times to total seconds
    ToSeconds(ToSecondsArgs),
    /// Convert total seconds to hh|mm|ss
    ToHms(ToHmsArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct StatArgs {
    /// Comma-space separated times, e.g. "01|15|59, 1|47|16" (reads --file or stdin if omitted)
    #[arg(value_name = "LIST")]
    pub list: Option<String>,

    /// Read the list from a file (use - for stdin)
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "list")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// "Range: .. Average: .. Median: .." line
    Plain,
    /// JSON object, or null for an empty list
    Json,
    /// Table with one row per statistic
    Table,
}

#[derive(Parser)]
pub struct ToSecondsArgs {
    /// Times in hh|mm|ss form
    #[arg(value_name = "TIME", required = true)]
    pub times: Vec<String>,
}

#[derive(Parser)]
pub struct ToHmsArgs {
    /// Total seconds
    #[arg(value_name = "SECONDS", required = true)]
    pub seconds: Vec<u64>,
}
