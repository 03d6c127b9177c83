//! Main entry point for the pathname CLI.
//!
//! This is the command-line interface for the pathname library.
//! It provides commands for working with paths:
//! - `clean`, `join`, `relative`, `split`: Lexical path algebra
//! - `ascend`, `descend`: Path lineage
//! - `realpath`: Symlink resolution
//! - `find`: Depth-first tree walk
//! - `rmtree`, `mktmpdir`: Directory management

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config,
        format: cli.format.map(Into::into),
    };

    let config = match utils::load_configuration(&global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging from flags, then configuration
    let _logger = utils::init_logging(utils::resolve_log_level(&global, &config));

    // Execute the command
    let result = match cli.command {
        cli::Command::Clean(cmd) => cmd.execute(&global, &config),
        cli::Command::Join(cmd) => cmd.execute(&global, &config),
        cli::Command::Relative(cmd) => cmd.execute(&global, &config),
        cli::Command::Split(cmd) => cmd.execute(&global, &config),
        cli::Command::Ascend(cmd) => cmd.execute(&global, &config),
        cli::Command::Descend(cmd) => cmd.execute(&global, &config),
        cli::Command::Realpath(cmd) => cmd.execute(&global, &config),
        cli::Command::Find(cmd) => cmd.execute(&global, &config),
        cli::Command::Rmtree(cmd) => cmd.execute(&global, &config),
        cli::Command::Mktmpdir(cmd) => cmd.execute(&global, &config),
        cli::Command::Completions(cmd) => cmd.execute(&global, &config),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
