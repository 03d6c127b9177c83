//! Library exports for pathname-cli.
//!
//! This module exports the CLI structure so that documentation tooling can
//! render the command tree without running the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
