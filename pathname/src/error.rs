//! Error types for the pathname library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathname library, using `thiserror` for ergonomic error handling.

use std::io::{self, ErrorKind};

use thiserror::Error;

/// Result type alias for operations that may fail with a pathname error.
///
/// # Examples
///
/// ```
/// use pathname::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/usr/bin")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathname library.
///
/// Pure path algebra only ever fails with [`Error::InvalidPath`] or
/// [`Error::Argument`]. The remaining variants come from the filesystem
/// collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// A path string could not be accepted.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path, lossily rendered.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Two paths cannot be combined by the requested operation.
    #[error("invalid argument: {details}")]
    Argument {
        /// Details about the incompatibility.
        details: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// A symlink loop was detected.
    #[error("symlink loop detected: {path}")]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: String,
    },

    /// Any other I/O error reported by a filesystem collaborator.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path the failing operation was applied to.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Wrap an I/O error raised while operating on `path`.
    ///
    /// `NotFound` and `PermissionDenied` become their dedicated variants so
    /// callers can match on them without inspecting the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    /// use std::io;
    ///
    /// let err = Error::from_io("/missing", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => Self::PathNotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    ///
    /// let err = Error::PathNotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    ///
    /// let err = Error::PermissionDenied { path: "/restricted".to_string() };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error reports incompatible arguments.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. })
    }

    /// The path the error refers to, when it carries one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidPath { path, .. }
            | Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::SymlinkLoop { path }
            | Self::Io { path, .. } => Some(path),
            Self::Argument { .. } | Self::Configuration(_) | Self::Validation { .. } => None,
        }
    }

    /// Rewrite the path carried by this error, if any.
    pub(crate) fn map_path(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Self::InvalidPath { path, reason } => Self::InvalidPath {
                path: f(path),
                reason,
            },
            Self::PathNotFound { path } => Self::PathNotFound { path: f(path) },
            Self::PermissionDenied { path } => Self::PermissionDenied { path: f(path) },
            Self::SymlinkLoop { path } => Self::SymlinkLoop { path: f(path) },
            Self::Io { path, source } => Self::Io {
                path: f(path),
                source,
            },
            other => other,
        }
    }
}
