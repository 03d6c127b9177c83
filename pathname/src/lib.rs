#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathname
//!
//! Immutable path values with a lexical path algebra, symlink resolution
//! and a lazy depth-first tree walker.
//!
//! A [`Pathname`] wraps a path string and never normalizes it implicitly.
//! Lexical operations work on the text alone. Anything that needs the disk
//! (existence checks, `realpath`, `find`, `rmtree`, `mktmpdir`) goes through
//! the [`FilesystemQuery`] and [`FilesystemMutate`] collaborators, with
//! [`OsFilesystem`] as the default.
//!
//! ## Core Types
//!
//! - [`Pathname`] and [`PathString`]: Path values
//! - [`Find`], [`Ascend`] and [`Descend`]: Lazy iterators over a tree or lineage
//! - [`RmtreeOptions`] and [`TempDirGuard`]: Recursive removal and scratch directories
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Layered defaults
//!
//! ## Examples
//!
//! ```
//! use pathname::Pathname;
//!
//! let path = Pathname::new("/usr/bin/ruby").unwrap();
//! assert_eq!(path.dirname().as_str(), "/usr/bin");
//! assert_eq!(path.basename().as_str(), "ruby");
//!
//! let base = Pathname::new("/usr/lib").unwrap();
//! let rel = path.relative_path_from(&base).unwrap();
//! assert_eq!(rel.as_str(), "../bin/ruby");
//!
//! assert_eq!((&base + &rel).as_str(), "/usr/bin/ruby");
//! ```
//!
//! The pure functions behind these methods live in [`path::algebra`]:
//!
//! ```
//! use pathname::path::algebra;
//!
//! assert_eq!(algebra::cleanpath("a/./b/../c"), "a/c");
//! assert_eq!(algebra::extname("archive.tar.gz"), ".gz");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{
    FileType, FilesystemMutate, FilesystemQuery, Metadata, OsFilesystem, RmtreeOptions,
    TempDirGuard,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Ascend, Descend, Filenames, Find, FindOptions, PathString, Pathname, ToPath};
