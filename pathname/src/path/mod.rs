//! Path values and the algebra over them.
//!
//! # Key Concepts
//!
//! ## Path strings
//!
//! A [`PathString`] is UTF-8 text with no NUL byte. It is never normalized
//! behind the caller's back: `"a//b/"` stays `"a//b/"` until an explicit
//! operation rewrites it. Anything path-like converts through [`ToPath`].
//!
//! ## Lexical operations
//!
//! [`algebra`] holds the pure functions: decomposition (`dirname`,
//! `basename`, `extname`), composition (`join`, `plus`), normalization
//! (`cleanpath`, `cleanpath_conservative`) and `relative_path_from`. None of
//! them touch the disk. The only separator is `/`.
//!
//! ## Filesystem-backed operations
//!
//! Resolution ([`Pathname::realpath`]) and traversal ([`Pathname::find`])
//! consult a [`FilesystemQuery`](crate::fs::FilesystemQuery) collaborator.
//!
//! # Examples
//!
//! ```
//! use pathname::Pathname;
//!
//! let path = Pathname::new("/usr/lib/../bin//ruby").unwrap();
//! assert_eq!(path.cleanpath().as_str(), "/usr/bin/ruby");
//!
//! let lineage: Vec<_> = path.cleanpath().descend().map(|p| p.into_string()).collect();
//! assert_eq!(lineage, ["/", "/usr", "/usr/bin", "/usr/bin/ruby"]);
//! ```

pub mod algebra;
mod find;
mod lineage;
mod pathname;
mod realpath;
mod string;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use find::{Find, FindOptions};
pub use lineage::{Ascend, Descend, Filenames};
pub use pathname::Pathname;
pub use realpath::MAX_SYMLINK_DEPTH;
pub use string::{PathString, ToPath};
