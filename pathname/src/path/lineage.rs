//! Lazy iterators over a path's ancestors and components.
//!
//! [`Ascend`] walks from the path itself up to its topmost ancestor,
//! [`Descend`] walks the same prefixes in the opposite order, and
//! [`Filenames`] yields the non-empty components. All three borrow the
//! source [`Pathname`]; call the producing method again to restart.

use std::iter::FusedIterator;

use super::algebra::{chop_basename, del_trailing_separator, is_absolute, SEPARATOR};
use super::pathname::Pathname;

/// End offset of the prefix one level above the prefix ending at `end`.
fn shorter(path: &str, end: usize) -> Option<usize> {
    let (prefix, _) = chop_basename(&path[..end])?;
    if prefix.is_empty() {
        None
    } else {
        Some(del_trailing_separator(prefix).len())
    }
}

/// End offset of the prefix one level below the prefix ending at `end`.
fn longer(path: &str, end: usize) -> usize {
    let rest = &path[end..];
    let after_seps = rest.len() - rest.trim_start_matches(SEPARATOR).len();
    let name_len = rest[after_seps..].find(SEPARATOR).unwrap_or(rest.len() - after_seps);
    let next = end + after_seps + name_len;
    if path[next..].bytes().all(|b| b == b'/') {
        path.len()
    } else {
        next
    }
}

/// End offset of the shortest prefix the lineage contains.
fn shortest(path: &str) -> usize {
    if chop_basename(path).is_none() {
        path.len()
    } else if is_absolute(path) {
        1
    } else {
        longer(path, 0)
    }
}

/// Iterator over a path and its ancestors, nearest first.
///
/// Created by [`Pathname::ascend`]. The first item is the path exactly as
/// written; later items drop trailing separators. An absolute path ends at
/// `/`, a relative one at its first component.
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::new("/usr/bin/ruby").unwrap();
/// let up: Vec<String> = path.ascend().map(|p| p.to_string()).collect();
/// assert_eq!(up, ["/usr/bin/ruby", "/usr/bin", "/usr", "/"]);
/// ```
#[derive(Debug, Clone)]
pub struct Ascend<'a> {
    path: &'a str,
    front: usize,
    back: usize,
    done: bool,
}

impl<'a> Ascend<'a> {
    pub(crate) fn new(path: &'a Pathname) -> Self {
        let path = path.as_str();
        Self {
            path,
            front: path.len(),
            back: shortest(path),
            done: false,
        }
    }

    fn item(&self, end: usize) -> Pathname {
        Pathname::from_trusted(self.path[..end].to_string())
    }
}

impl Iterator for Ascend<'_> {
    type Item = Pathname;

    fn next(&mut self) -> Option<Pathname> {
        if self.done {
            return None;
        }
        let item = self.item(self.front);
        if self.front == self.back {
            self.done = true;
        } else {
            match shorter(self.path, self.front) {
                Some(end) => self.front = end,
                None => self.done = true,
            }
        }
        Some(item)
    }
}

impl DoubleEndedIterator for Ascend<'_> {
    fn next_back(&mut self) -> Option<Pathname> {
        if self.done {
            return None;
        }
        let item = self.item(self.back);
        if self.front == self.back {
            self.done = true;
        } else {
            self.back = longer(self.path, self.back);
        }
        Some(item)
    }
}

impl FusedIterator for Ascend<'_> {}

/// Iterator over a path's ancestors, topmost first, ending at the path.
///
/// Created by [`Pathname::descend`]. Yields exactly the items of
/// [`Ascend`] in reverse.
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::new("a/b/c").unwrap();
/// let down: Vec<String> = path.descend().map(|p| p.to_string()).collect();
/// assert_eq!(down, ["a", "a/b", "a/b/c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Descend<'a>(Ascend<'a>);

impl<'a> Descend<'a> {
    pub(crate) fn new(path: &'a Pathname) -> Self {
        Self(Ascend::new(path))
    }
}

impl Iterator for Descend<'_> {
    type Item = Pathname;

    fn next(&mut self) -> Option<Pathname> {
        self.0.next_back()
    }
}

impl DoubleEndedIterator for Descend<'_> {
    fn next_back(&mut self) -> Option<Pathname> {
        self.0.next()
    }
}

impl FusedIterator for Descend<'_> {}

/// Iterator over the non-empty components of a path.
///
/// Created by [`Pathname::each_filename`]. `.` and `..` are yielded as
/// written; repeated separators produce nothing.
#[derive(Debug, Clone)]
pub struct Filenames<'a> {
    inner: std::str::Split<'a, char>,
}

impl<'a> Filenames<'a> {
    pub(crate) fn new(path: &'a Pathname) -> Self {
        Self {
            inner: path.as_str().split(SEPARATOR),
        }
    }
}

impl<'a> Iterator for Filenames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.by_ref().find(|name| !name.is_empty())
    }
}

impl<'a> DoubleEndedIterator for Filenames<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.by_ref().rfind(|name| !name.is_empty())
    }
}

impl FusedIterator for Filenames<'_> {}
