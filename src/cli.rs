use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sync-guard")]
#[command(
    author,
    version,
    about = "Find file and folder names that will not sync to cloud storage"
)]
#[command(long_about = "Walks a directory tree and reports names with restricted \
    characters, characters outside the permitted set, misplaced spaces and paths \
    that are too long. Stray spaces in file names are repaired in place.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - Issues found (only with --strict)\n  \
    2 - Invalid arguments or configuration")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Absolute path of the folder to scan (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Maximum full path length in characters (overrides config, default 260)
    #[arg(short = 'l', long = "max-length")]
    pub max_length: Option<String>,

    /// Print every folder and file as it is processed
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the report and the progress spinner
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Report planned renames without touching the disk
    #[arg(long)]
    pub no_fix: bool,

    /// Descend into symlinked folders and check symlinked files
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when any entry has issues
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
