//! Validated path strings and the conversion trait for path-like input.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An immutable, validated path string.
///
/// The only invariant is that the string contains no NUL byte. No
/// normalization happens at construction: `"a//b/"` stays `"a//b/"`.
///
/// # Examples
///
/// ```
/// use pathname::PathString;
///
/// let s = PathString::new("usr//bin/").unwrap();
/// assert_eq!(s.as_str(), "usr//bin/");
/// assert!(PathString::new("a\0b").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathString(String);

impl PathString {
    /// Validate and wrap a path string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the string contains a NUL byte.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.contains('\0') {
            return Err(Error::InvalidPath {
                path: path.escape_default().to_string(),
                reason: "contains a NUL byte".to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Wrap text produced by path operations on already validated input.
    pub(crate) fn from_trusted(path: String) -> Self {
        debug_assert!(!path.contains('\0'), "NUL byte in derived path");
        Self(path)
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PathString> for String {
    fn from(value: PathString) -> Self {
        value.0
    }
}

/// Capability for values that can be viewed as a path string.
///
/// Implemented for the string types, the `std::path` and `std::ffi` types,
/// and the crate's own path types. Operations that accept "anything
/// path-like" take `&impl ToPath`.
///
/// # Examples
///
/// ```
/// use pathname::ToPath;
/// use std::path::PathBuf;
///
/// assert_eq!(PathBuf::from("/tmp").to_path_str().unwrap(), "/tmp");
/// assert_eq!("a/b".to_path_str().unwrap(), "a/b");
/// ```
pub trait ToPath {
    /// Borrow or produce the path as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the value is not valid UTF-8.
    fn to_path_str(&self) -> Result<Cow<'_, str>>;
}

fn non_utf8(path: &OsStr) -> Error {
    Error::InvalidPath {
        path: path.to_string_lossy().into_owned(),
        reason: "contains invalid UTF-8".to_string(),
    }
}

impl ToPath for str {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToPath for String {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl ToPath for Cow<'_, str> {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_ref()))
    }
}

impl ToPath for OsStr {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        self.to_str().map(Cow::Borrowed).ok_or_else(|| non_utf8(self))
    }
}

impl ToPath for OsString {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_path_str()
    }
}

impl ToPath for Path {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_path_str()
    }
}

impl ToPath for PathBuf {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_path_str()
    }
}

impl ToPath for PathString {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ToPath + ?Sized> ToPath for &T {
    fn to_path_str(&self) -> Result<Cow<'_, str>> {
        (**self).to_path_str()
    }
}
