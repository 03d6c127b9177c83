//! Pure path algebra over `/`-separated strings.
//!
//! Nothing in this module touches the filesystem. Every function takes
//! `&str` and either borrows a slice of its input or builds a new string.
//! The [`Pathname`](crate::Pathname) facade wraps these functions.
//!
//! # Examples
//!
//! ```
//! use pathname::path::algebra;
//!
//! assert_eq!(algebra::cleanpath("a/./b/../c//"), "a/c");
//! assert_eq!(algebra::join("usr", "lib"), "usr/lib");
//! assert_eq!(algebra::plus("/usr/lib", "../bin"), "/usr/bin");
//! assert_eq!(algebra::extname("archive.tar.gz"), ".gz");
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// The only separator recognized.
pub const SEPARATOR: char = '/';

const CUR_DIR: &str = ".";
const PARENT_DIR: &str = "..";

fn is_all_separators(s: &str) -> bool {
    s.bytes().all(|b| b == b'/')
}

/// Split off the last component of `path`.
///
/// Returns `(prefix, name)` where `prefix` is everything before `name`,
/// including the separators that precede it. Trailing separators are
/// ignored. Returns `None` when there is no component left, that is for
/// `""` and for paths made only of separators.
///
/// ```
/// use pathname::path::algebra::chop_basename;
///
/// assert_eq!(chop_basename("a/b/"), Some(("a/", "b")));
/// assert_eq!(chop_basename("/a"), Some(("/", "a")));
/// assert_eq!(chop_basename("//"), None);
/// ```
#[must_use]
pub fn chop_basename(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return None;
    }
    let start = trimmed.rfind(SEPARATOR).map_or(0, |i| i + 1);
    Some((&trimmed[..start], &trimmed[start..]))
}

/// Decompose `path` into its root prefix and its component names.
///
/// The prefix is `""` for relative paths and the leading separators for
/// absolute ones.
#[must_use]
pub fn split_names(path: &str) -> (&str, Vec<&str>) {
    let mut names = Vec::new();
    let mut rest = path;
    while let Some((prefix, name)) = chop_basename(rest) {
        names.push(name);
        rest = prefix;
    }
    names.reverse();
    (rest, names)
}

/// Rebuild a path from a root prefix and an already-joined relative part.
fn prepend_prefix(prefix: &str, relpath: &str) -> String {
    let absolute = prefix.contains(SEPARATOR);
    match (absolute, relpath.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => CUR_DIR.to_string(),
        (true, false) => format!("/{relpath}"),
        (false, false) => relpath.to_string(),
    }
}

/// Whether `path` starts at the root.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Whether `path` is relative (the empty path included).
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !is_absolute(path)
}

/// Whether `path` is the root: one or more separators and nothing else.
#[must_use]
pub fn is_root(path: &str) -> bool {
    !path.is_empty() && is_all_separators(path)
}

/// Whether `path` ends with a separator after its last component.
#[must_use]
pub fn has_trailing_separator(path: &str) -> bool {
    chop_basename(path).is_some() && path.ends_with(SEPARATOR)
}

/// Append a separator unless `path` is empty or already ends with one.
#[must_use]
pub fn add_trailing_separator(path: &str) -> String {
    if path.is_empty() || path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Remove trailing separators, keeping a single one for the root.
#[must_use]
pub fn del_trailing_separator(path: &str) -> &str {
    match chop_basename(path) {
        Some((prefix, name)) => &path[..prefix.len() + name.len()],
        None if path.is_empty() => path,
        None => &path[..1],
    }
}

/// The directory part of `path`.
///
/// ```
/// use pathname::path::algebra::dirname;
///
/// assert_eq!(dirname("/usr/lib/"), "/usr");
/// assert_eq!(dirname("lib"), ".");
/// assert_eq!(dirname("/"), "/");
/// assert_eq!(dirname(""), ".");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() { CUR_DIR } else { "/" };
    }
    match trimmed.rfind(SEPARATOR) {
        None => CUR_DIR,
        Some(i) => {
            let dir = trimmed[..i].trim_end_matches(SEPARATOR);
            if dir.is_empty() {
                "/"
            } else {
                dir
            }
        }
    }
}

/// The last component of `path`, ignoring trailing separators.
///
/// The root's basename is `"/"` and the empty path's basename is `""`.
#[must_use]
pub fn basename(path: &str) -> &str {
    match chop_basename(path) {
        Some((_, name)) => name,
        None if path.is_empty() => path,
        None => "/",
    }
}

/// The basename with `suffix` removed.
///
/// The suffix is removed only when the name ends with it and is longer than
/// it. The wildcard `".*"` removes whatever [`extname`] reports.
///
/// ```
/// use pathname::path::algebra::basename_without;
///
/// assert_eq!(basename_without("/foo/bar.txt", ".txt"), "bar");
/// assert_eq!(basename_without("/foo/bar.txt", ".*"), "bar");
/// assert_eq!(basename_without("/foo/.txt", ".txt"), ".txt");
/// ```
#[must_use]
pub fn basename_without<'a>(path: &'a str, suffix: &str) -> &'a str {
    let name = basename(path);
    if name == "/" {
        return name;
    }
    if suffix == ".*" {
        let ext = extname(name);
        return &name[..name.len() - ext.len()];
    }
    if !suffix.is_empty() && name.len() > suffix.len() {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return stripped;
        }
    }
    name
}

/// The extension of the basename, including its dot.
///
/// Leading dots of the name never start an extension, so dotfiles and names
/// made only of dots have none. A name ending in a dot has the extension
/// `"."`.
///
/// ```
/// use pathname::path::algebra::extname;
///
/// assert_eq!(extname("/foo/bar.txt"), ".txt");
/// assert_eq!(extname(".bashrc"), "");
/// assert_eq!(extname("..."), "");
/// assert_eq!(extname("foo."), ".");
/// ```
#[must_use]
pub fn extname(path: &str) -> &str {
    let name = basename(path);
    let body = name.trim_start_matches('.');
    match body.rfind('.') {
        Some(i) => &body[i..],
        None => "",
    }
}

/// Join `segment` onto `base` without resolving `.` or `..`.
///
/// An absolute segment replaces `base`. Separators at the joint are
/// collapsed to one. Empty operands leave the other side unchanged.
///
/// ```
/// use pathname::path::algebra::join;
///
/// assert_eq!(join("a/", "b"), "a/b");
/// assert_eq!(join("a", "/etc"), "/etc");
/// assert_eq!(join("/", "etc"), "/etc");
/// assert_eq!(join("a", "../b"), "a/../b");
/// ```
#[must_use]
pub fn join(base: &str, segment: &str) -> String {
    if is_absolute(segment) || base.is_empty() {
        return segment.to_string();
    }
    if segment.is_empty() {
        return base.to_string();
    }
    let left = base.trim_end_matches(SEPARATOR);
    if left.is_empty() {
        format!("/{segment}")
    } else {
        format!("{left}/{segment}")
    }
}

/// Join every segment onto `base`, left to right.
#[must_use]
pub fn join_all<I, S>(base: &str, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .fold(base.to_string(), |acc, segment| join(&acc, segment.as_ref()))
}

/// Append `other` to `path`, folding `..` and `.` lexically.
///
/// Leading `..` names of `other` consume trailing names of `path`, and `.`
/// names of `other` vanish. Above the root `..` is dropped; for relative
/// paths it is kept. An absolute `other` wins outright.
///
/// ```
/// use pathname::path::algebra::plus;
///
/// assert_eq!(plus("/usr", "bin/ruby"), "/usr/bin/ruby");
/// assert_eq!(plus("/usr/lib", "../bin"), "/usr/bin");
/// assert_eq!(plus("/", ".."), "/");
/// assert_eq!(plus("a", "../.."), "..");
/// assert_eq!(plus("a", "/b"), "/b");
/// ```
#[must_use]
pub fn plus(path: &str, other: &str) -> String {
    // Start offsets and names of `other`, left to right.
    let mut offsets = Vec::new();
    let mut names = Vec::new();
    let mut rest = other;
    while let Some((prefix, name)) = chop_basename(rest) {
        offsets.push(prefix.len());
        names.push(name);
        rest = prefix;
    }
    if !rest.is_empty() {
        return other.to_string();
    }
    offsets.reverse();
    names.reverse();
    let mut head = 0;

    let mut prefix = path;
    loop {
        while names.get(head) == Some(&CUR_DIR) {
            head += 1;
        }
        let Some((before, name)) = chop_basename(prefix) else {
            break;
        };
        prefix = before;
        if name == CUR_DIR {
            continue;
        }
        if name == PARENT_DIR || names.get(head) != Some(&PARENT_DIR) {
            prefix = &path[..before.len() + name.len()];
            break;
        }
        head += 1;
    }

    let at_root = chop_basename(prefix).is_none() && is_root(prefix);
    let has_base = at_root || chop_basename(prefix).is_some();
    if at_root {
        while names.get(head) == Some(&PARENT_DIR) {
            head += 1;
        }
    }

    if head < names.len() {
        let suffix = &other[offsets[head]..];
        if has_base {
            join(prefix, suffix)
        } else {
            format!("{prefix}{suffix}")
        }
    } else if has_base {
        prefix.to_string()
    } else {
        dirname(prefix).to_string()
    }
}

/// Normalize `path` lexically.
///
/// Removes `.` names, folds `name/..` pairs, collapses repeated separators
/// and drops trailing ones. `..` that would climb above the root is dropped;
/// leading `..` of a relative path is kept. An empty result is `"."`.
/// Symlinks are not considered, so the result may name a different file
/// than the input when a folded name was a symlink.
///
/// ```
/// use pathname::path::algebra::cleanpath;
///
/// assert_eq!(cleanpath("/a/b/../../../c"), "/c");
/// assert_eq!(cleanpath("../a/./b/.."), "../a");
/// assert_eq!(cleanpath("a/.."), ".");
/// assert_eq!(cleanpath("//usr///lib/"), "/usr/lib");
/// ```
#[must_use]
pub fn cleanpath(path: &str) -> String {
    let (prefix, names) = split_names(path);
    let mut kept: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        match name {
            CUR_DIR => {}
            PARENT_DIR => {
                if kept.last().is_some_and(|last| *last != PARENT_DIR) {
                    kept.pop();
                } else {
                    kept.push(name);
                }
            }
            _ => kept.push(name),
        }
    }
    if is_root(prefix) {
        let leading = kept.iter().take_while(|n| **n == PARENT_DIR).count();
        kept.drain(..leading);
    }
    prepend_prefix(prefix, &kept.join("/"))
}

/// Normalize `path` without folding `..`.
///
/// Only `.` names and redundant separators are removed, so the result is
/// safe in the presence of symlinks. `..` directly under the root is still
/// dropped. A trailing `/.` or a trailing separator is preserved.
///
/// ```
/// use pathname::path::algebra::cleanpath_conservative;
///
/// assert_eq!(cleanpath_conservative("a/./b/../c"), "a/b/../c");
/// assert_eq!(cleanpath_conservative("a//b/"), "a/b/");
/// assert_eq!(cleanpath_conservative("a/."), "a/.");
/// assert_eq!(cleanpath_conservative("/../x"), "/x");
/// ```
#[must_use]
pub fn cleanpath_conservative(path: &str) -> String {
    let (prefix, names) = split_names(path);
    let mut kept: Vec<&str> = names.into_iter().filter(|n| *n != CUR_DIR).collect();
    if is_root(prefix) {
        let leading = kept.iter().take_while(|n| **n == PARENT_DIR).count();
        kept.drain(..leading);
    }
    let Some(&last) = kept.last() else {
        return dirname(prefix).to_string();
    };
    if last != PARENT_DIR && basename(path) == CUR_DIR {
        kept.push(CUR_DIR);
    }
    let result = prepend_prefix(prefix, &kept.join("/"));
    let last = kept.last().copied().unwrap_or_default();
    if last != CUR_DIR && last != PARENT_DIR && has_trailing_separator(path) {
        add_trailing_separator(&result)
    } else {
        result
    }
}

/// Express `dest` relative to `base`, lexically.
///
/// Both sides are cleaned first.
///
/// # Errors
///
/// Returns [`Error::Argument`] when one side is absolute and the other is
/// relative, or when `base` still contains `..` past the common prefix.
///
/// ```
/// use pathname::path::algebra::relative_path_from;
///
/// assert_eq!(relative_path_from("/a/b/c", "/a/x").unwrap(), "../b/c");
/// assert_eq!(relative_path_from("a", "a").unwrap(), ".");
/// assert!(relative_path_from("/a", "a").is_err());
/// ```
pub fn relative_path_from(dest: &str, base: &str) -> Result<String> {
    let dest_clean = cleanpath(dest);
    let base_clean = cleanpath(base);
    let (dest_prefix, dest_names) = split_names(&dest_clean);
    let (base_prefix, base_names) = split_names(&base_clean);
    let dest_names: Vec<&str> = dest_names.into_iter().filter(|n| *n != CUR_DIR).collect();
    let base_names: Vec<&str> = base_names.into_iter().filter(|n| *n != CUR_DIR).collect();

    if is_absolute(dest_prefix) != is_absolute(base_prefix) {
        return Err(Error::Argument {
            details: format!("different prefix: {dest_prefix:?} and {base:?}"),
        });
    }

    let common = dest_names
        .iter()
        .zip(&base_names)
        .take_while(|(d, b)| d == b)
        .count();
    let base_rest = &base_names[common..];
    if base_rest.contains(&PARENT_DIR) {
        return Err(Error::Argument {
            details: format!("base directory has ..: {base:?}"),
        });
    }

    let relpath: Vec<&str> = std::iter::repeat(PARENT_DIR)
        .take(base_rest.len())
        .chain(dest_names[common..].iter().copied())
        .collect();
    if relpath.is_empty() {
        Ok(CUR_DIR.to_string())
    } else {
        Ok(relpath.join("/"))
    }
}

/// Replace the first literal occurrence of `pattern`.
#[must_use]
pub fn sub(path: &str, pattern: &str, replacement: &str) -> String {
    path.replacen(pattern, replacement, 1)
}

/// Replace the extension reported by [`extname`] with `replacement`.
///
/// Paths without an extension get `replacement` appended.
#[must_use]
pub fn sub_ext(path: &str, replacement: &str) -> String {
    let ext = extname(path);
    let stem = path.strip_suffix(ext).unwrap_or(path);
    format!("{stem}{replacement}")
}

/// Order two path strings byte by byte, with `/` sorting before every
/// other byte.
///
/// This keeps a directory's entries together: `a/b < a-b < ab`.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    fn key(byte: u8) -> u8 {
        if byte == b'/' {
            0
        } else {
            byte
        }
    }
    a.bytes().map(key).cmp(b.bytes().map(key))
}
