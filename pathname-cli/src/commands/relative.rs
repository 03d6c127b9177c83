//! Relative path command.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::Config;

/// Express a path relative to a base directory, lexically.
#[derive(Args)]
pub struct RelativeCommand {
    /// Destination path
    pub path: String,

    /// Base directory
    #[arg(long, value_name = "BASE")]
    pub from: String,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let base = parse_path(&self.from)?;
        let relative = path.relative_path_from(&base)?;
        print_path(resolve_format(global, config), &relative)
    }
}
