//! Lineage commands: `ascend` and `descend`.

use crate::error::CliError;
use crate::utils::{parse_path, print_paths, resolve_format, GlobalOptions};
use clap::Args;
use pathname::Config;

/// List a path, then each parent up to the root.
#[derive(Args)]
pub struct AscendCommand {
    /// Starting path
    pub path: String,
}

impl AscendCommand {
    /// Execute the ascend command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        print_paths(resolve_format(global, config), path.ascend())
    }
}

/// List the root, then each prefix down to the full path.
#[derive(Args)]
pub struct DescendCommand {
    /// Final path
    pub path: String,
}

impl DescendCommand {
    /// Execute the descend command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        print_paths(resolve_format(global, config), path.descend())
    }
}
