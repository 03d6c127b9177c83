//! The [`Pathname`] value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::algebra;
use super::lineage::{Ascend, Descend, Filenames};
use super::string::{PathString, ToPath};
use crate::error::{Error, Result};
use crate::fs::remove::{rmtree, RmtreeOptions};
use crate::fs::tmpdir::{self, TempDirGuard};
use crate::fs::{FilesystemMutate, FilesystemQuery, OsFilesystem};

/// An immutable filesystem path.
///
/// A `Pathname` owns one [`PathString`] and nothing else. Equality,
/// ordering and hashing look only at that string, so `"a/b"` and `"a//b"`
/// are different values even though they name the same file. Every
/// operation returns a new value.
///
/// Operations that need the filesystem come in pairs: `foo()` uses
/// [`OsFilesystem`], `foo_in(fs)` uses the collaborator you pass.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let lib = Pathname::new("/usr/lib").unwrap();
/// let ruby = lib.join(["ruby", "3.3"]).unwrap();
/// assert_eq!(ruby.as_str(), "/usr/lib/ruby/3.3");
/// assert_eq!(ruby.basename().as_str(), "3.3");
/// assert_eq!(ruby.parent().as_str(), "/usr/lib/ruby");
///
/// let rel = ruby.relative_path_from(&"/usr/share").unwrap();
/// assert_eq!(rel.as_str(), "../lib/ruby/3.3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pathname {
    path: PathString,
}

impl Pathname {
    /// Build a pathname from anything path-like.
    ///
    /// The text is kept verbatim. Passing a `Pathname` rebinds to its string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the text contains a NUL byte or
    /// the input is not valid UTF-8.
    pub fn new<P: ToPath + ?Sized>(path: &P) -> Result<Self> {
        let text = path.to_path_str()?;
        Ok(Self {
            path: PathString::new(text.into_owned())?,
        })
    }

    /// Wrap a string already known to be free of NUL bytes.
    pub(crate) fn from_trusted(path: String) -> Self {
        Self {
            path: PathString::from_trusted(path),
        }
    }

    /// The path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// The path as a `std::path::Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(self.path.as_str())
    }

    /// The wrapped validated string.
    #[must_use]
    pub fn as_path_string(&self) -> &PathString {
        &self.path
    }

    /// Consume and return the path text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path.into_string()
    }

    /// Whether the path starts at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        algebra::is_absolute(self.as_str())
    }

    /// Whether the path is relative. The empty path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        algebra::is_relative(self.as_str())
    }

    /// Whether the path is the root, however many separators spell it.
    #[must_use]
    pub fn is_root(&self) -> bool {
        algebra::is_root(self.as_str())
    }

    /// The directory part. See [`algebra::dirname`].
    #[must_use]
    pub fn dirname(&self) -> Self {
        Self::from_trusted(algebra::dirname(self.as_str()).to_string())
    }

    /// The last component. See [`algebra::basename`].
    #[must_use]
    pub fn basename(&self) -> Self {
        Self::from_trusted(algebra::basename(self.as_str()).to_string())
    }

    /// The last component with `suffix` (or `".*"`) removed.
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let p = Pathname::new("/foo/bar.txt").unwrap();
    /// assert_eq!(p.basename_without(".txt").as_str(), "bar");
    /// ```
    #[must_use]
    pub fn basename_without(&self, suffix: &str) -> Self {
        Self::from_trusted(algebra::basename_without(self.as_str(), suffix).to_string())
    }

    /// The extension of the last component, dot included, or `""`.
    #[must_use]
    pub fn extname(&self) -> &str {
        algebra::extname(self.as_str())
    }

    /// `(dirname, basename)`.
    #[must_use]
    pub fn split(&self) -> (Self, Self) {
        (self.dirname(), self.basename())
    }

    /// The non-empty components, lazily.
    #[must_use]
    pub fn each_filename(&self) -> Filenames<'_> {
        Filenames::new(self)
    }

    /// The path and its ancestors, nearest first.
    #[must_use]
    pub fn ascend(&self) -> Ascend<'_> {
        Ascend::new(self)
    }

    /// The ancestors and the path, topmost first.
    #[must_use]
    pub fn descend(&self) -> Descend<'_> {
        Descend::new(self)
    }

    /// Join `segments` onto this path without resolving `.` or `..`.
    ///
    /// An absolute segment discards everything before it. Joining nothing
    /// returns a copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when a segment is not a valid path.
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let a = Pathname::new("a").unwrap();
    /// let b = Pathname::new("b").unwrap();
    /// let c = Pathname::new("c").unwrap();
    /// assert_eq!(a.join([&b, &c]).unwrap().as_str(), "a/b/c");
    /// assert_eq!(a.join(["/etc"]).unwrap().as_str(), "/etc");
    /// ```
    pub fn join<I>(&self, segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToPath,
    {
        let mut joined = self.as_str().to_string();
        for segment in segments {
            let segment = Self::new(&segment)?;
            joined = algebra::join(&joined, segment.as_str());
        }
        Ok(Self::from_trusted(joined))
    }

    /// Append `other`, folding `.` and leading `..` lexically.
    ///
    /// Also available as `&a + &b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when `other` is not a valid path.
    pub fn plus<P: ToPath + ?Sized>(&self, other: &P) -> Result<Self> {
        let other = Self::new(other)?;
        Ok(self + &other)
    }

    /// The lexical parent, `self + ".."`.
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("/a/b").unwrap().parent().as_str(), "/a");
    /// assert_eq!(Pathname::new("a").unwrap().parent().as_str(), ".");
    /// assert_eq!(Pathname::new("/").unwrap().parent().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        Self::from_trusted(algebra::plus(self.as_str(), ".."))
    }

    /// Lexical normalization. See [`algebra::cleanpath`].
    #[must_use]
    pub fn cleanpath(&self) -> Self {
        Self::from_trusted(algebra::cleanpath(self.as_str()))
    }

    /// Symlink-safe normalization that keeps `..`.
    /// See [`algebra::cleanpath_conservative`].
    #[must_use]
    pub fn cleanpath_conservative(&self) -> Self {
        Self::from_trusted(algebra::cleanpath_conservative(self.as_str()))
    }

    /// This path expressed relative to `base`, lexically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] when exactly one side is absolute or when
    /// `base` climbs with `..` past the shared prefix, and
    /// [`Error::InvalidPath`] when `base` is not a valid path.
    pub fn relative_path_from<P: ToPath + ?Sized>(&self, base: &P) -> Result<Self> {
        let base = Self::new(base)?;
        algebra::relative_path_from(self.as_str(), base.as_str()).map(Self::from_trusted)
    }

    /// Replace the first occurrence of `pattern` with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the replacement introduces a NUL.
    pub fn sub(&self, pattern: &str, replacement: &str) -> Result<Self> {
        Self::new(&algebra::sub(self.as_str(), pattern, replacement))
    }

    /// Replace the extension with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the replacement introduces a NUL.
    pub fn sub_ext(&self, replacement: &str) -> Result<Self> {
        Self::new(&algebra::sub_ext(self.as_str(), replacement))
    }

    /// Whether the path exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists_in(&OsFilesystem)
    }

    /// Whether `fs` reports the path as existing. Symlinks are followed.
    #[must_use]
    pub fn exists_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> bool {
        fs.metadata(self.as_str()).is_ok()
    }

    /// Whether the path is a directory on disk.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory_in(&OsFilesystem)
    }

    /// Whether `fs` reports the path as a directory. Symlinks are followed.
    #[must_use]
    pub fn is_directory_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> bool {
        fs.metadata(self.as_str()).is_ok_and(|m| m.is_dir())
    }

    /// Whether the path is a regular file on disk.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.is_file_in(&OsFilesystem)
    }

    /// Whether `fs` reports the path as a regular file. Symlinks are followed.
    #[must_use]
    pub fn is_file_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> bool {
        fs.metadata(self.as_str()).is_ok_and(|m| m.is_file())
    }

    /// Whether the path itself is a symlink on disk.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.is_symlink_in(&OsFilesystem)
    }

    /// Whether `fs` reports the path itself as a symlink.
    #[must_use]
    pub fn is_symlink_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> bool {
        fs.symlink_metadata(self.as_str()).is_ok_and(|m| m.is_symlink())
    }

    /// Whether the path is a mount point on disk.
    #[must_use]
    pub fn is_mountpoint(&self) -> bool {
        self.is_mountpoint_in(&OsFilesystem)
    }

    /// Whether the path is a mount point according to `fs`.
    ///
    /// A mount point lives on a different device than its parent, or is
    /// its own parent. Missing paths are not mount points.
    #[must_use]
    pub fn is_mountpoint_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> bool {
        let (Ok(own), Ok(up)) = (
            fs.symlink_metadata(self.as_str()),
            fs.symlink_metadata(self.parent().as_str()),
        ) else {
            return false;
        };
        own.dev != up.dev || own.ino == up.ino
    }

    /// The directory's entries on disk. See [`Pathname::children_in`].
    ///
    /// # Errors
    ///
    /// Returns the listing error.
    pub fn children(&self, with_directory: bool) -> Result<Vec<Self>> {
        self.children_in(&OsFilesystem, with_directory)
    }

    /// The directory's entries, without `.` and `..`, in listing order.
    ///
    /// With `with_directory` each entry is joined onto this path, otherwise
    /// only the bare names are returned. Listing `.` always returns bare
    /// names.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's listing error.
    pub fn children_in<F: FilesystemQuery + ?Sized>(
        &self,
        fs: &F,
        with_directory: bool,
    ) -> Result<Vec<Self>> {
        let with_directory = with_directory && self.as_str() != ".";
        let names = fs.read_dir(self.as_str())?;
        names
            .into_iter()
            .map(|name| {
                if with_directory {
                    Self::new(&algebra::join(self.as_str(), &name))
                } else {
                    Self::new(&name)
                }
            })
            .collect()
    }

    /// The directory's entries on disk. See [`Pathname::entries_in`].
    ///
    /// # Errors
    ///
    /// Returns the listing error.
    pub fn entries(&self) -> Result<Vec<Self>> {
        self.entries_in(&OsFilesystem)
    }

    /// The directory's entry names, `.` and `..` first.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's listing error.
    pub fn entries_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> Result<Vec<Self>> {
        let mut entries = vec![
            Self::from_trusted(".".to_string()),
            Self::from_trusted("..".to_string()),
        ];
        entries.extend(self.children_in(fs, false)?);
        Ok(entries)
    }

    /// The symlink's target on disk.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error when the path is not a symlink.
    pub fn read_link(&self) -> Result<Self> {
        self.read_link_in(&OsFilesystem)
    }

    /// The symlink's target, verbatim.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error when the path is not a symlink.
    pub fn read_link_in<F: FilesystemQuery + ?Sized>(&self, fs: &F) -> Result<Self> {
        Self::new(&fs.read_link(self.as_str())?)
    }

    /// Create the directory and its missing parents on disk.
    ///
    /// # Errors
    ///
    /// Returns the creation error.
    pub fn mkpath(&self) -> Result<&Self> {
        self.mkpath_in(&OsFilesystem)
    }

    /// Create the directory and its missing parents through `fs`.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's creation error.
    pub fn mkpath_in<M: FilesystemMutate + ?Sized>(&self, fs: &M) -> Result<&Self> {
        fs.create_dir_all(self.as_str())?;
        Ok(self)
    }

    /// Remove the tree rooted here on disk.
    ///
    /// # Errors
    ///
    /// See [`Pathname::rmtree_in`].
    pub fn rmtree(&self, options: &RmtreeOptions) -> Result<&Self> {
        self.rmtree_in(&OsFilesystem, options)
    }

    /// Remove the tree rooted here through `fs`.
    ///
    /// A missing path counts as removed. Returns `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns any removal failure other than a missing path.
    pub fn rmtree_in<M: FilesystemMutate + ?Sized>(
        &self,
        fs: &M,
        options: &RmtreeOptions,
    ) -> Result<&Self> {
        rmtree(fs, self.as_str(), options)?;
        Ok(self)
    }

    /// Create a temporary directory on disk. The caller removes it.
    ///
    /// # Errors
    ///
    /// Returns the creation error.
    pub fn mktmpdir() -> Result<Self> {
        Self::mktmpdir_in(&OsFilesystem)
    }

    /// Create a temporary directory through `fs`. The caller removes it.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's creation error.
    pub fn mktmpdir_in<M: FilesystemMutate + ?Sized>(fs: &M) -> Result<Self> {
        Ok(TempDirGuard::create(fs, tmpdir::DEFAULT_PREFIX)?.into_path())
    }

    /// Run `f` with a temporary directory on disk that is removed afterwards.
    ///
    /// # Errors
    ///
    /// See [`Pathname::mktmpdir_scoped_in`].
    ///
    /// ```
    /// use pathname::{Error, Pathname};
    ///
    /// let kept = Pathname::mktmpdir_scoped(|dir| {
    ///     assert!(dir.is_directory());
    ///     Ok::<_, Error>(dir.clone())
    /// })
    /// .unwrap();
    /// assert!(!kept.exists());
    /// ```
    pub fn mktmpdir_scoped<T, E, F>(f: F) -> std::result::Result<T, E>
    where
        E: From<Error>,
        F: FnOnce(&Self) -> std::result::Result<T, E>,
    {
        Self::mktmpdir_scoped_in(&OsFilesystem, f)
    }

    /// Run `f` with a temporary directory created through `fs`.
    ///
    /// The directory and its contents are removed whether `f` returns `Ok`,
    /// returns `Err`, or panics.
    ///
    /// # Errors
    ///
    /// Returns the creation error, the callback's error, or, when the
    /// callback succeeded, the removal error.
    pub fn mktmpdir_scoped_in<M, T, E, F>(fs: &M, f: F) -> std::result::Result<T, E>
    where
        M: FilesystemMutate + ?Sized,
        E: From<Error>,
        F: FnOnce(&Self) -> std::result::Result<T, E>,
    {
        tmpdir::with_temp_dir(fs, tmpdir::DEFAULT_PREFIX, f)
    }
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Pathname {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pathname {
    fn cmp(&self, other: &Self) -> Ordering {
        algebra::compare(self.as_str(), other.as_str())
    }
}

impl Add<&Pathname> for &Pathname {
    type Output = Pathname;

    fn add(self, other: &Pathname) -> Pathname {
        Pathname::from_trusted(algebra::plus(self.as_str(), other.as_str()))
    }
}

impl Add<Pathname> for Pathname {
    type Output = Pathname;

    fn add(self, other: Pathname) -> Pathname {
        &self + &other
    }
}

impl ToPath for Pathname {
    fn to_path_str(&self) -> Result<std::borrow::Cow<'_, str>> {
        Ok(std::borrow::Cow::Borrowed(self.as_str()))
    }
}

impl FromStr for Pathname {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Pathname {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Pathname {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Ok(Self {
            path: PathString::new(value)?,
        })
    }
}

impl TryFrom<PathBuf> for Pathname {
    type Error = Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<PathString> for Pathname {
    fn from(path: PathString) -> Self {
        Self { path }
    }
}

impl From<Pathname> for String {
    fn from(value: Pathname) -> Self {
        value.into_string()
    }
}

impl From<Pathname> for PathBuf {
    fn from(value: Pathname) -> Self {
        PathBuf::from(value.into_string())
    }
}

impl AsRef<str> for Pathname {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<Path> for Pathname {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
