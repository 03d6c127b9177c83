//! Temporary directory command.

use crate::error::CliError;
use crate::utils::{print_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::fs::tmpdir::DEFAULT_PREFIX;
use pathname::{Config, OsFilesystem, TempDirGuard};

/// Create a temporary directory and print its path.
///
/// The directory is left in place; remove it with `pathname rmtree`.
#[derive(Args)]
pub struct MktmpdirCommand {
    /// Name prefix for the directory
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

impl MktmpdirCommand {
    /// Execute the mktmpdir command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        if self.prefix.contains('/') {
            return Err(CliError::InvalidArguments(format!(
                "prefix must not contain '/': {}",
                self.prefix
            )));
        }
        let dir = TempDirGuard::create(&OsFilesystem, &self.prefix)?.into_path();
        print_path(resolve_format(global, config), &dir)
    }
}
