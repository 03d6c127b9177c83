//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including argument conversion, configuration loading, logging setup and
//! output formatting.

use crate::error::CliError;
use pathname::config::OutputFormat;
use pathname::{Config, ConfigBuilder, LogLevel, Logger, Pathname};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file, above the user config.
    pub config_file: Option<PathBuf>,

    /// Output format from the command line, if given.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `--config` file
/// 3. User configuration file
/// 4. Built-in defaults (lowest priority)
///
/// Command-line flags are applied on top by each command.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config_file {
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the log level: flags first, then configuration, then normal.
pub fn resolve_log_level(global: &GlobalOptions, config: &Config) -> LogLevel {
    if global.verbose {
        LogLevel::Verbose
    } else if global.quiet {
        LogLevel::Quiet
    } else {
        config.log_level().unwrap_or(LogLevel::Normal)
    }
}

/// Install the stderr logger as the `log` backend.
pub fn init_logging(level: LogLevel) -> Logger {
    let logger = Logger::new(level);
    if logger.install().is_err() {
        logger.debug("logger already installed");
    }
    logger
}

/// Pick the output format: flag first, then configuration, then text.
pub fn resolve_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global
        .format
        .or(config.output_format)
        .unwrap_or_default()
}

/// Convert a command-line argument into a path value.
pub fn parse_path(arg: &str) -> Result<Pathname, CliError> {
    Pathname::new(arg).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Print a single path.
pub fn print_path(format: OutputFormat, path: &Pathname) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => println!("{path}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(path)?),
    }
    Ok(())
}

/// Print a list of paths, one per line or as a JSON array.
pub fn print_paths<I>(format: OutputFormat, paths: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = Pathname>,
{
    match format {
        OutputFormat::Text => {
            for path in paths {
                println!("{path}");
            }
        }
        OutputFormat::Json => {
            let paths: Vec<Pathname> = paths.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
    }
    Ok(())
}
