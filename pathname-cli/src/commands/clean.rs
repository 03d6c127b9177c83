//! Lexical normalization command.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::Config;

/// Remove `.`, `..` and repeated separators without touching the disk.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to normalize
    pub path: String,

    /// Keep `..` components, which is safe in the presence of symlinks
    #[arg(long)]
    pub conservative: bool,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let cleaned = if self.conservative {
            path.cleanpath_conservative()
        } else {
            path.cleanpath()
        };
        print_path(resolve_format(global, config), &cleaned)
    }
}
