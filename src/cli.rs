use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tree::ExclusionGroup;

/// Tree Limited - print a directory tree with limited depth
///
/// Hidden files (names starting with ".") are always skipped. Excluded
/// directories are shown but not expanded.
#[derive(Parser, Debug)]
#[command(name = "tree-limited")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Starting directory
    #[arg(default_value = ".")]
    pub start_path: PathBuf,

    /// Maximum nesting level [default: 2]
    #[arg(long, value_name = "N")]
    pub max_level: Option<usize>,

    /// Files/directories to exclude from expansion
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Preset exclusion group
    #[arg(long, value_enum, value_name = "GROUP")]
    pub exclude_group: Option<ExclusionGroup>,

    /// File to write the tree to (prints to stdout if omitted)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
