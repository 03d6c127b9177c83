//! Recursive removal command.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;
use pathname::Config;

/// Remove a directory tree. A missing path is not an error.
#[derive(Args)]
pub struct RmtreeCommand {
    /// Tree to remove
    pub path: String,

    /// Report what would be removed without removing it
    #[arg(long)]
    pub noop: bool,

    /// Use the race-resistant removal strategy
    #[arg(long)]
    pub secure: bool,
}

impl RmtreeCommand {
    /// Execute the rmtree command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        if path.is_root() {
            return Err(CliError::InvalidArguments(
                "refusing to remove the root directory".to_string(),
            ));
        }

        let defaults = config.rmtree_options();
        let options = defaults
            .with_noop(defaults.noop || self.noop)
            .with_secure(defaults.secure || self.secure)
            .with_verbose(defaults.verbose || global.verbose || self.noop);

        path.rmtree(&options)?;
        Ok(())
    }
}
