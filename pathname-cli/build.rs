//! Build script for pathname-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command tree
//! is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).value_name("PATH").required(true)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathname")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, normalize and walk paths")
        .long_about(
            "Command-line tool for lexical path algebra, symlink resolution and depth-first tree walks",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read defaults from this configuration file")
                .value_name("PATH")
                .global(true)
                .env("PATHNAME_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("clean")
                .about("Normalize a path lexically")
                .arg(path_arg("path", "Path to normalize"))
                .arg(
                    Arg::new("conservative")
                        .long("conservative")
                        .help("Keep .. components")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("join")
                .about("Join segments onto a base path")
                .arg(path_arg("base", "Base path"))
                .arg(
                    Arg::new("segments")
                        .help("Segments to append")
                        .num_args(1..)
                        .required(true),
                )
                .arg(
                    Arg::new("fold")
                        .long("fold")
                        .help("Fold . and leading .. into the base")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("relative")
                .about("Express a path relative to a base")
                .arg(path_arg("path", "Destination path"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("BASE")
                        .required(true)
                        .help("Base directory"),
                ),
            Command::new("split")
                .about("Split a path into directory, name and extension")
                .arg(path_arg("path", "Path to split")),
            Command::new("ascend")
                .about("List a path and each of its parents")
                .arg(path_arg("path", "Starting path")),
            Command::new("descend")
                .about("List the root down to the full path")
                .arg(path_arg("path", "Final path")),
            Command::new("realpath")
                .about("Resolve symlinks against the filesystem")
                .arg(path_arg("path", "Path to resolve"))
                .arg(
                    Arg::new("allow-missing-last")
                        .long("allow-missing-last")
                        .help("Allow the final component to be missing")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("find")
                .about("Walk a directory tree depth-first")
                .arg(Arg::new("path").help("Root of the walk").default_value("."))
                .arg(
                    Arg::new("prune")
                        .long("prune")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Do not descend into directories with this name"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Stop at the first unreadable entry")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("rmtree")
                .about("Remove a directory tree")
                .arg(path_arg("path", "Tree to remove"))
                .arg(
                    Arg::new("noop")
                        .long("noop")
                        .help("Report without removing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("secure")
                        .long("secure")
                        .help("Use the race-resistant removal strategy")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("mktmpdir")
                .about("Create a temporary directory")
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .help("Name prefix for the directory"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathname.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
