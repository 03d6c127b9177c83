//! Lazy depth-first traversal of a directory tree.
//!
//! [`Find`] is a pull iterator over a [`Pathname`] and everything below it.
//! It keeps an explicit stack of pending paths instead of recursing, so it
//! can be paused, dropped or pruned between any two items.
//!
//! # Examples
//!
//! ```no_run
//! use pathname::{FindOptions, Pathname};
//!
//! let root = Pathname::new("src").unwrap();
//! let mut walk = root.find(FindOptions::default()).unwrap();
//! while let Some(entry) = walk.next() {
//!     let entry = entry.unwrap();
//!     if entry.basename().as_str() == "target" {
//!         walk.prune();
//!         continue;
//!     }
//!     println!("{entry}");
//! }
//! ```

use std::iter::FusedIterator;

use super::algebra;
use super::pathname::Pathname;
use crate::error::Result;
use crate::fs::{FilesystemQuery, OsFilesystem};

/// Options for [`Pathname::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Skip entries that cannot be inspected or listed instead of stopping.
    pub ignore_error: bool,
}

impl FindOptions {
    /// Default options: errors are ignored.
    #[must_use]
    pub const fn new() -> Self {
        Self { ignore_error: true }
    }

    /// Set whether inspection and listing errors are skipped.
    #[must_use]
    pub const fn with_ignore_error(mut self, ignore_error: bool) -> Self {
        self.ignore_error = ignore_error;
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over a directory tree.
///
/// The root is yielded first. A directory's children are listed when the
/// item after it is requested, so calling [`Find::prune`] right after
/// receiving a directory skips its whole subtree. Children are sorted by
/// name and symlinks are never followed.
///
/// With `ignore_error` unset the first inspection or listing failure is
/// yielded as `Err` and the iterator ends.
#[derive(Debug)]
pub struct Find<F> {
    fs: F,
    stack: Vec<String>,
    pending: Option<String>,
    ignore_error: bool,
    strip_dot: bool,
    finished: bool,
}

impl<F: FilesystemQuery> Find<F> {
    fn new(fs: F, root: &Pathname, options: FindOptions) -> Result<Self> {
        fs.metadata(root.as_str())?;
        Ok(Self {
            fs,
            stack: vec![root.as_str().to_string()],
            pending: None,
            ignore_error: options.ignore_error,
            strip_dot: root.as_str() == ".",
            finished: false,
        })
    }

    /// Do not descend into the most recently yielded path.
    ///
    /// Has no effect on files or when called twice.
    pub fn prune(&mut self) {
        if let Some(path) = self.pending.take() {
            log::debug!("find: pruned {path}");
        }
    }

    /// Push the children of `dir`, if it is a directory, in reverse order so
    /// the smallest name is popped first.
    fn expand(&mut self, dir: &str) -> Result<()> {
        if !self.fs.symlink_metadata(dir)?.is_dir() {
            return Ok(());
        }
        let mut names = self.fs.read_dir(dir)?;
        names.sort_unstable();
        self.stack.extend(
            names
                .iter()
                .rev()
                .map(|name| algebra::join(dir, name)),
        );
        Ok(())
    }

    fn display(&self, path: String) -> String {
        if self.strip_dot {
            if let Some(stripped) = path.strip_prefix("./") {
                return stripped.to_string();
            }
        }
        path
    }
}

impl<F: FilesystemQuery> Iterator for Find<F> {
    type Item = Result<Pathname>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(dir) = self.pending.take() {
            if let Err(e) = self.expand(&dir) {
                if !self.ignore_error {
                    self.finished = true;
                    self.stack.clear();
                    return Some(Err(e.map_path(|path| self.display(path))));
                }
                log::debug!("find: skipping {dir}: {e}");
            }
        }

        let Some(path) = self.stack.pop() else {
            self.finished = true;
            return None;
        };
        self.pending = Some(path.clone());
        Some(Pathname::new(&self.display(path)))
    }
}

impl<F: FilesystemQuery> FusedIterator for Find<F> {}

impl Pathname {
    /// Walk the tree rooted here on disk.
    ///
    /// # Errors
    ///
    /// See [`Pathname::find_in`].
    pub fn find(&self, options: FindOptions) -> Result<Find<OsFilesystem>> {
        self.find_in(OsFilesystem, options)
    }

    /// Walk the tree rooted here through `fs`.
    ///
    /// When this path is `.`, yielded descendants drop the leading `./`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`](crate::Error::PathNotFound) when the
    /// root does not exist. Nothing is yielded in that case.
    pub fn find_in<F: FilesystemQuery>(&self, fs: F, options: FindOptions) -> Result<Find<F>> {
        Find::new(fs, self, options)
    }
}
