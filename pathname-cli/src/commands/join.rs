//! Join command.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::Config;

/// Join segments onto a base path.
///
/// An absolute segment discards everything before it. `.` and `..` are
/// kept as written unless `--fold` is given.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    pub base: String,

    /// Segments to append, left to right
    #[arg(required = true)]
    pub segments: Vec<String>,

    /// Fold `.` and leading `..` of each segment into the base
    #[arg(long)]
    pub fold: bool,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let base = parse_path(&self.base)?;
        let joined = if self.fold {
            let mut acc = base;
            for segment in &self.segments {
                acc = acc
                    .plus(segment.as_str())
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            }
            acc
        } else {
            base.join(&self.segments)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?
        };
        print_path(resolve_format(global, config), &joined)
    }
}
