//! Shell completion generation command.
//!
//! Writes the completion script for the requested shell to stdout and a
//! short installation hint to stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use pathname::Config;
use std::io;

/// Binary name from the `[[bin]]` table
const BIN_NAME: &str = "pathname";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(pathname completions bash)\"  # in ~/.bashrc"),
        Shell::Zsh => Some("pathname completions zsh > ~/.zsh/completions/_pathname"),
        Shell::Fish => {
            Some("pathname completions fish > ~/.config/fish/completions/pathname.fish")
        }
        Shell::PowerShell => {
            Some("pathname completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions, _config: &Config) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# {} completions; to enable:", self.shell);
                eprintln!("#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
