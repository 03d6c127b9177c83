//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `clean`: Lexical normalization
//! - `join`: Join segments onto a base
//! - `relative`: Relative path between two paths
//! - `split`: Directory, name and extension of a path
//! - `ascend` / `descend`: Lineage of a path
//! - `realpath`: Symlink resolution
//! - `find`: Depth-first tree walk
//! - `rmtree`: Recursive removal
//! - `mktmpdir`: Temporary directory creation
//! - `completions`: Shell completion scripts

pub mod clean;
pub mod completions;
pub mod find;
pub mod join;
pub mod lineage;
pub mod mktmpdir;
pub mod realpath;
pub mod relative;
pub mod rmtree;
pub mod split;

pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use find::FindCommand;
pub use join::JoinCommand;
pub use lineage::{AscendCommand, DescendCommand};
pub use mktmpdir::MktmpdirCommand;
pub use realpath::RealpathCommand;
pub use relative::RelativeCommand;
pub use rmtree::RmtreeCommand;
pub use split::SplitCommand;
