//! Filesystem collaborators.
//!
//! The path algebra never touches the disk. Everything that does goes
//! through two traits:
//!
//! - [`FilesystemQuery`]: metadata, directory listings, symlink targets and
//!   the current directory.
//! - [`FilesystemMutate`]: recursive removal, directory creation and
//!   temporary directories.
//!
//! [`OsFilesystem`] implements both on top of `std::fs` and `tempfile`.
//! Tests substitute in-memory or mocked implementations.
//!
//! All paths cross the boundary as `&str`. Collaborators report failures as
//! [`Error`](crate::Error) values, using [`Error::from_io`](crate::Error::from_io)
//! so that missing entries and permission problems stay distinguishable.

mod os;
pub mod remove;
pub mod tmpdir;

pub use os::OsFilesystem;
pub use remove::RmtreeOptions;
pub use tmpdir::TempDirGuard;

use crate::error::Result;

/// The kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link (only reported by `symlink_metadata`).
    Symlink,
    /// Anything else: sockets, devices, fifos.
    Other,
}

/// The subset of entry metadata the library consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// The entry kind.
    pub file_type: FileType,
    /// Size in bytes.
    pub len: u64,
    /// Device id, or 0 where the platform has none.
    pub dev: u64,
    /// Inode number, or 0 where the platform has none.
    pub ino: u64,
}

impl Metadata {
    /// Metadata with only a file type set.
    #[must_use]
    pub const fn new(file_type: FileType) -> Self {
        Self {
            file_type,
            len: 0,
            dev: 0,
            ino: 0,
        }
    }

    /// Set the device and inode numbers.
    #[must_use]
    pub const fn with_identity(mut self, dev: u64, ino: u64) -> Self {
        self.dev = dev;
        self.ino = ino;
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn with_len(mut self, len: u64) -> Self {
        self.len = len;
        self
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Whether the entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Whether the entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }
}

/// Read-only filesystem services.
pub trait FilesystemQuery {
    /// Metadata of `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`](crate::Error::PathNotFound) when the
    /// path does not exist.
    fn metadata(&self, path: &str) -> Result<Metadata>;

    /// Metadata of `path` itself, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`](crate::Error::PathNotFound) when the
    /// path does not exist.
    fn symlink_metadata(&self, path: &str) -> Result<Metadata>;

    /// Names of the entries of directory `path`, excluding `.` and `..`.
    ///
    /// No particular order is promised.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`](crate::Error::PermissionDenied)
    /// when the directory cannot be listed.
    fn read_dir(&self, path: &str) -> Result<Vec<String>>;

    /// The target of symlink `path`, verbatim.
    ///
    /// # Errors
    ///
    /// Fails when `path` is missing or is not a symlink.
    fn read_link(&self, path: &str) -> Result<String>;

    /// The process working directory, used to anchor relative paths.
    ///
    /// # Errors
    ///
    /// Fails when the working directory is gone or unreadable.
    fn current_dir(&self) -> Result<String>;
}

/// Filesystem services that change the disk.
pub trait FilesystemMutate {
    /// Remove `path` and everything below it.
    ///
    /// A missing path is not an error. With `secure` the implementation must
    /// not follow symlinks swapped in while it runs.
    ///
    /// # Errors
    ///
    /// Returns the first failure other than a missing entry.
    fn remove_tree(&self, path: &str, secure: bool) -> Result<()>;

    /// Remove the empty directory `path`.
    ///
    /// # Errors
    ///
    /// Fails when the directory is missing or not empty.
    fn remove_dir(&self, path: &str) -> Result<()>;

    /// Create `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails when a component exists as a non-directory or cannot be created.
    fn create_dir_all(&self, path: &str) -> Result<()>;

    /// Create a fresh, uniquely named directory whose name starts with
    /// `prefix` and return its path. The caller owns its removal.
    ///
    /// # Errors
    ///
    /// Fails when the temporary location is not writable.
    fn create_temp_dir(&self, prefix: &str) -> Result<String>;
}

impl<T: FilesystemQuery + ?Sized> FilesystemQuery for &T {
    fn metadata(&self, path: &str) -> Result<Metadata> {
        (**self).metadata(path)
    }

    fn symlink_metadata(&self, path: &str) -> Result<Metadata> {
        (**self).symlink_metadata(path)
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        (**self).read_dir(path)
    }

    fn read_link(&self, path: &str) -> Result<String> {
        (**self).read_link(path)
    }

    fn current_dir(&self) -> Result<String> {
        (**self).current_dir()
    }
}

impl<T: FilesystemMutate + ?Sized> FilesystemMutate for &T {
    fn remove_tree(&self, path: &str, secure: bool) -> Result<()> {
        (**self).remove_tree(path, secure)
    }

    fn remove_dir(&self, path: &str) -> Result<()> {
        (**self).remove_dir(path)
    }

    fn create_dir_all(&self, path: &str) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn create_temp_dir(&self, prefix: &str) -> Result<String> {
        (**self).create_temp_dir(prefix)
    }
}
