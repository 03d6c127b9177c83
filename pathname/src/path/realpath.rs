//! Symlink-resolving normalization.
//!
//! Resolution walks the path one component at a time through a
//! [`FilesystemQuery`], splicing symlink targets back into the queue of
//! unresolved components. Relative paths are anchored at the collaborator's
//! current directory.

use std::collections::VecDeque;
use std::io;

use super::algebra::{self, split_names};
use super::pathname::Pathname;
use crate::error::{Error, Result};
use crate::fs::{FilesystemQuery, OsFilesystem};

/// Symlinks followed before resolution gives up with
/// [`Error::SymlinkLoop`].
pub const MAX_SYMLINK_DEPTH: usize = 40;

fn queue_names(path: &str) -> VecDeque<String> {
    split_names(path).1.into_iter().map(str::to_string).collect()
}

fn absolute(resolved: &[String]) -> String {
    format!("/{}", resolved.join("/"))
}

/// Resolve `path` to an absolute path free of symlinks, `.` and `..`.
///
/// With `allow_missing_last` the final component may be missing, every
/// other component must exist.
fn resolve<F: FilesystemQuery + ?Sized>(
    fs: &F,
    path: &str,
    allow_missing_last: bool,
) -> Result<String> {
    let start = if algebra::is_absolute(path) {
        path.to_string()
    } else {
        algebra::join(&fs.current_dir()?, path)
    };

    let mut resolved: Vec<String> = Vec::new();
    let mut pending = queue_names(&start);
    let mut hops = 0;

    while let Some(name) = pending.pop_front() {
        match name.as_str() {
            "." => continue,
            ".." => {
                resolved.pop();
                continue;
            }
            _ => {}
        }

        resolved.push(name);
        let candidate = absolute(&resolved);
        let meta = match fs.symlink_metadata(&candidate) {
            Ok(meta) => meta,
            Err(e) if e.is_not_found() && allow_missing_last && pending.is_empty() => {
                break;
            }
            Err(e) => return Err(e),
        };

        if meta.is_symlink() {
            hops += 1;
            if hops > MAX_SYMLINK_DEPTH {
                return Err(Error::SymlinkLoop { path: candidate });
            }
            let target = fs.read_link(&candidate)?;
            log::debug!("realpath: {candidate} -> {target}");
            resolved.pop();
            if algebra::is_absolute(&target) {
                resolved.clear();
            }
            for name in queue_names(&target).into_iter().rev() {
                pending.push_front(name);
            }
        } else if !meta.is_dir() && pending.iter().any(|n| n != ".") {
            return Err(Error::Io {
                path: candidate,
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }
    }

    Ok(absolute(&resolved))
}

impl Pathname {
    /// The real absolute path on disk.
    ///
    /// # Errors
    ///
    /// See [`Pathname::realpath_in`].
    pub fn realpath(&self) -> Result<Self> {
        self.realpath_in(&OsFilesystem)
    }

    /// The real absolute path according to `fs`: every symlink followed,
    /// every `.` and `..` resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] when any component is missing and
    /// [`Error::SymlinkLoop`] after [`MAX_SYMLINK_DEPTH`] symlinks.
    pub fn realpath_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> Result<Self> {
        resolve(fs, self.as_str(), false).map(Self::from_trusted)
    }

    /// Like [`Pathname::realpath`], but the last component may be missing.
    ///
    /// # Errors
    ///
    /// See [`Pathname::realdirpath_in`].
    pub fn realdirpath(&self) -> Result<Self> {
        self.realdirpath_in(&OsFilesystem)
    }

    /// Like [`Pathname::realpath_in`], but the last component may be
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] when a component other than the last
    /// is missing and [`Error::SymlinkLoop`] after [`MAX_SYMLINK_DEPTH`]
    /// symlinks.
    pub fn realdirpath_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> Result<Self> {
        resolve(fs, self.as_str(), true).map(Self::from_trusted)
    }
}
