//! Split command.

use crate::error::CliError;
use crate::utils::{parse_path, resolve_format, GlobalOptions};
use clap::Args;
use pathname::config::OutputFormat;
use pathname::Config;
use serde::Serialize;

/// Print the directory, name and extension of a path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    pub path: String,
}

#[derive(Serialize)]
struct Parts<'a> {
    dirname: String,
    basename: String,
    extname: &'a str,
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let (dirname, basename) = path.split();
        let parts = Parts {
            dirname: dirname.into_string(),
            basename: basename.into_string(),
            extname: path.extname(),
        };

        match resolve_format(global, config) {
            OutputFormat::Text => {
                println!("{}", parts.dirname);
                println!("{}", parts.basename);
                println!("{}", parts.extname);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parts)?),
        }
        Ok(())
    }
}
