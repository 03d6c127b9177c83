//! Common test utilities for integration tests.
//!
//! This module provides an in-memory filesystem and on-disk fixture helpers
//! for testing the pathname library.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use pathname::path::algebra;
use pathname::{Error, FileType, FilesystemMutate, FilesystemQuery, Metadata, Result};

/// A node of the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Node {
    /// A directory; `readable: false` makes listing it fail.
    Dir { readable: bool },
    /// A regular file.
    File,
    /// A symbolic link with a verbatim target.
    Symlink(String),
}

/// An in-memory filesystem keyed by absolute or relative path text.
///
/// Paths are stored exactly as added, without a trailing separator. Parents
/// are created implicitly. Symlinks are followed by `metadata` but never by
/// `symlink_metadata` or `read_dir` keys.
#[derive(Debug, Default)]
pub struct FakeFs {
    nodes: RefCell<BTreeMap<String, Node>>,
    cwd: String,
    temp_counter: RefCell<usize>,
    /// Every path passed to `remove_tree`, in order.
    pub removed: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeFs {
    /// An empty filesystem containing only `/`, with `/` as working directory.
    pub fn new() -> Self {
        let fs = Self {
            cwd: "/".to_string(),
            ..Default::default()
        };
        fs.nodes
            .borrow_mut()
            .insert("/".to_string(), Node::Dir { readable: true });
        fs
    }

    /// Set the working directory used to anchor relative paths.
    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self.dir(cwd)
    }

    /// Add a directory and its parents.
    pub fn dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: true });
        self
    }

    /// Add a directory that cannot be listed.
    pub fn locked_dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: false });
        self
    }

    /// Add a file and its parents.
    pub fn file(self, path: &str) -> Self {
        self.insert(path, Node::File);
        self
    }

    /// Add a symlink pointing at `target`.
    pub fn symlink(self, path: &str, target: &str) -> Self {
        self.insert(path, Node::Symlink(target.to_string()));
        self
    }

    /// Whether `path` is present.
    pub fn contains(&self, path: &str) -> bool {
        self.nodes.borrow().contains_key(&key(path))
    }

    fn insert(&self, path: &str, node: Node) {
        let path = key(path);
        let mut parent = algebra::dirname(&path).to_string();
        let mut nodes = self.nodes.borrow_mut();
        while parent != "." && !nodes.contains_key(&parent) {
            nodes.insert(parent.clone(), Node::Dir { readable: true });
            parent = algebra::dirname(&parent).to_string();
        }
        nodes.insert(path, node);
    }

    fn lookup(&self, path: &str) -> Result<Node> {
        self.nodes
            .borrow()
            .get(&key(path))
            .cloned()
            .ok_or_else(|| Error::PathNotFound {
                path: path.to_string(),
            })
    }
}

fn key(path: &str) -> String {
    algebra::del_trailing_separator(path).to_string()
}

fn meta(node: &Node) -> Metadata {
    match node {
        Node::Dir { .. } => Metadata::new(FileType::Directory),
        Node::File => Metadata::new(FileType::File),
        Node::Symlink(_) => Metadata::new(FileType::Symlink),
    }
}

impl FilesystemQuery for FakeFs {
    fn metadata(&self, path: &str) -> Result<Metadata> {
        let mut current = path.to_string();
        for _ in 0..8 {
            match self.lookup(&current)? {
                Node::Symlink(target) => {
                    current = algebra::plus(algebra::dirname(&current), &target);
                }
                node => return Ok(meta(&node)),
            }
        }
        Err(Error::SymlinkLoop {
            path: path.to_string(),
        })
    }

    fn symlink_metadata(&self, path: &str) -> Result<Metadata> {
        self.lookup(path).map(|node| meta(&node))
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        match self.lookup(path)? {
            Node::Dir { readable: true } => {}
            Node::Dir { readable: false } => {
                return Err(Error::PermissionDenied {
                    path: path.to_string(),
                })
            }
            _ => {
                return Err(Error::InvalidPath {
                    path: path.to_string(),
                    reason: "not a directory".to_string(),
                })
            }
        }
        let dir = key(path);
        // Reverse order so callers cannot rely on listing order.
        let names: BTreeSet<String> = self
            .nodes
            .borrow()
            .keys()
            .filter(|k| k.as_str() != dir && algebra::dirname(k) == dir)
            .map(|k| algebra::basename(k).to_string())
            .collect();
        Ok(names.into_iter().rev().collect())
    }

    fn read_link(&self, path: &str) -> Result<String> {
        match self.lookup(path)? {
            Node::Symlink(target) => Ok(target),
            _ => Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "not a symlink".to_string(),
            }),
        }
    }

    fn current_dir(&self) -> Result<String> {
        Ok(self.cwd.clone())
    }
}

impl FilesystemMutate for FakeFs {
    fn remove_tree(&self, path: &str, _secure: bool) -> Result<()> {
        self.removed.borrow_mut().push(path.to_string());
        let root = key(path);
        let prefix = algebra::add_trailing_separator(&root);
        self.nodes
            .borrow_mut()
            .retain(|k, _| k != &root && !k.starts_with(&prefix));
        Ok(())
    }

    fn remove_dir(&self, path: &str) -> Result<()> {
        self.nodes.borrow_mut().remove(&key(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<()> {
        self.insert(path, Node::Dir { readable: true });
        Ok(())
    }

    fn create_temp_dir(&self, prefix: &str) -> Result<String> {
        let mut counter = self.temp_counter.borrow_mut();
        *counter += 1;
        let path = format!("/tmp/{prefix}{counter}");
        self.insert(&path, Node::Dir { readable: true });
        Ok(path)
    }
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Create every listed file (with parents) below `root`.
#[allow(dead_code)]
pub fn create_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, file.as_bytes()).unwrap();
    }
}
