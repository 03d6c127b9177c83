//! Tree walk command.
//!
//! Text output is streamed as the walk proceeds. JSON output is collected
//! and printed once the walk ends.

use crate::error::CliError;
use crate::utils::{parse_path, print_paths, resolve_format, GlobalOptions};
use clap::Args;
use pathname::config::OutputFormat;
use pathname::Config;

/// Walk a directory tree depth-first, parents before children.
#[derive(Args)]
pub struct FindCommand {
    /// Root of the walk
    #[arg(default_value = ".")]
    pub path: String,

    /// Do not descend into directories with this name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub prune: Vec<String>,

    /// Stop at the first unreadable entry instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let root = parse_path(&self.path)?;
        let mut options = config.find_options();
        if self.strict {
            options = options.with_ignore_error(false);
        }
        let format = resolve_format(global, config);

        let mut walker = root.find(options)?;
        let mut collected = Vec::new();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            let name = entry.basename();
            if self.prune.iter().any(|p| p.as_str() == name.as_str()) {
                log::debug!("pruning {entry}");
                walker.prune();
                continue;
            }
            match format {
                OutputFormat::Text => println!("{entry}"),
                OutputFormat::Json => collected.push(entry),
            }
        }

        if format == OutputFormat::Json {
            print_paths(format, collected)?;
        }
        Ok(())
    }
}
