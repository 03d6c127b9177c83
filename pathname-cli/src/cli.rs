//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AscendCommand, CleanCommand, CompletionsCommand, DescendCommand, FindCommand, JoinCommand,
    MktmpdirCommand, RealpathCommand, RelativeCommand, RmtreeCommand, SplitCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use pathname::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for path algebra and tree walking.
#[derive(Parser)]
#[command(name = "pathname")]
#[command(version, about = "Inspect, normalize and walk paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read defaults from this configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PATHNAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format accepted by `--format`.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One value per line
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path lexically
    Clean(CleanCommand),

    /// Join segments onto a base path
    Join(JoinCommand),

    /// Express a path relative to a base
    Relative(RelativeCommand),

    /// Split a path into directory, name and extension
    Split(SplitCommand),

    /// List a path and each of its parents
    Ascend(AscendCommand),

    /// List the root down to the full path
    Descend(DescendCommand),

    /// Resolve symlinks against the filesystem
    Realpath(RealpathCommand),

    /// Walk a directory tree depth-first
    Find(FindCommand),

    /// Remove a directory tree
    Rmtree(RmtreeCommand),

    /// Create a temporary directory
    Mktmpdir(MktmpdirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
