//! Symlink resolution command.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::Config;

/// Resolve symlinks, `.` and `..` against the filesystem.
#[derive(Args)]
pub struct RealpathCommand {
    /// Path to resolve
    pub path: String,

    /// Allow the final component to be missing
    #[arg(long)]
    pub allow_missing_last: bool,
}

impl RealpathCommand {
    /// Execute the realpath command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let resolved = if self.allow_missing_last {
            path.realdirpath()?
        } else {
            path.realpath()?
        };
        print_path(resolve_format(global, config), &resolved)
    }
}
