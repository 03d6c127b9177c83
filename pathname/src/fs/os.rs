//! `std::fs` backed collaborator.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::{FileType, FilesystemMutate, FilesystemQuery, Metadata};
use crate::error::{Error, Result};

/// The real filesystem.
///
/// # Examples
///
/// ```no_run
/// use pathname::{FilesystemQuery, OsFilesystem};
///
/// let names = OsFilesystem.read_dir("/etc").unwrap();
/// assert!(!names.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

fn convert(meta: &fs::Metadata) -> Metadata {
    let ft = meta.file_type();
    let file_type = if ft.is_symlink() {
        FileType::Symlink
    } else if ft.is_dir() {
        FileType::Directory
    } else if ft.is_file() {
        FileType::File
    } else {
        FileType::Other
    };

    #[cfg(unix)]
    let (dev, ino) = {
        use std::os::unix::fs::MetadataExt;
        (meta.dev(), meta.ino())
    };
    #[cfg(not(unix))]
    let (dev, ino) = (0, 0);

    Metadata::new(file_type)
        .with_len(meta.len())
        .with_identity(dev, ino)
}

fn path_to_string(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: raw.to_string_lossy().into_owned(),
            reason: "contains invalid UTF-8".to_string(),
        })
}

/// Treat an entry that vanished before we got to it as removed.
fn ignore_vanished(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Remove a tree entry by entry, depth first, without following symlinks.
///
/// Entries removed by someone else mid-walk are skipped. A failure carries
/// the path of the entry that could not be removed.
fn remove_recursive(path: &Path) -> std::result::Result<(), (PathBuf, io::Error)> {
    let fail = |e: io::Error| (path.to_path_buf(), e);

    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(fail(e)),
    };
    if !meta.is_dir() {
        return ignore_vanished(fs::remove_file(path)).map_err(fail);
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(fail(e)),
    };
    for entry in entries {
        match entry {
            Ok(entry) => remove_recursive(&entry.path())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(fail(e)),
        }
    }
    ignore_vanished(fs::remove_dir(path)).map_err(fail)
}

fn entry_error((path, source): (PathBuf, io::Error)) -> Error {
    Error::from_io(path.to_string_lossy(), source)
}

impl FilesystemQuery for OsFilesystem {
    fn metadata(&self, path: &str) -> Result<Metadata> {
        fs::metadata(path)
            .map(|m| convert(&m))
            .map_err(|e| Error::from_io(path, e))
    }

    fn symlink_metadata(&self, path: &str) -> Result<Metadata> {
        fs::symlink_metadata(path)
            .map(|m| convert(&m))
            .map_err(|e| Error::from_io(path, e))
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| Error::from_io(path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(path, e))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|raw| Error::InvalidPath {
                    path: Path::new(path).join(&raw).to_string_lossy().into_owned(),
                    reason: "contains invalid UTF-8".to_string(),
                })?;
            names.push(name);
        }
        Ok(names)
    }

    fn read_link(&self, path: &str) -> Result<String> {
        let target = fs::read_link(path).map_err(|e| Error::from_io(path, e))?;
        path_to_string(target)
    }

    fn current_dir(&self) -> Result<String> {
        let cwd = std::env::current_dir().map_err(|e| Error::from_io(".", e))?;
        path_to_string(cwd)
    }
}

impl FilesystemMutate for OsFilesystem {
    fn remove_tree(&self, path: &str, secure: bool) -> Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(Error::from_io(path, e)),
        };

        if !meta.is_dir() {
            return ignore_vanished(fs::remove_file(path)).map_err(|e| Error::from_io(path, e));
        }
        if !secure {
            return remove_recursive(Path::new(path)).map_err(entry_error);
        }

        // std opens each level relative to its parent descriptor, so a
        // directory swapped for a symlink mid-walk is not followed.
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            // Something vanished under std's walk; finish entry by entry.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                remove_recursive(Path::new(path)).map_err(entry_error)
            }
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    fn remove_dir(&self, path: &str) -> Result<()> {
        fs::remove_dir(path).map_err(|e| Error::from_io(path, e))
    }

    fn create_dir_all(&self, path: &str) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))
    }

    fn create_temp_dir(&self, prefix: &str) -> Result<String> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| Error::from_io(std::env::temp_dir().to_string_lossy(), e))?;
        path_to_string(dir.keep())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_str(dir: &TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_metadata_reports_kinds() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, b"hello").unwrap();

        let meta = OsFilesystem.metadata(&dir_str(&tmp)).unwrap();
        assert!(meta.is_dir());

        let meta = OsFilesystem.metadata(file.to_str().unwrap()).unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.len, 5);
    }

    #[test]
    fn test_metadata_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = OsFilesystem.metadata(missing.to_str().unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_dir_lists_names() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b"), b"").unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();

        let mut names = OsFilesystem.read_dir(&dir_str(&tmp)).unwrap();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_metadata_and_read_link() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink("target", &link).unwrap();
        let link = link.to_str().unwrap();

        assert!(OsFilesystem.symlink_metadata(link).unwrap().is_symlink());
        assert_eq!(OsFilesystem.read_link(link).unwrap(), "target");
        assert!(OsFilesystem.metadata(link).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_tree_both_strategies() {
        for secure in [false, true] {
            let tmp = TempDir::new().unwrap();
            let root = tmp.path().join("tree");
            fs::create_dir_all(root.join("x/y")).unwrap();
            fs::write(root.join("x/y/z"), b"z").unwrap();

            OsFilesystem
                .remove_tree(root.to_str().unwrap(), secure)
                .unwrap();
            assert!(!root.exists());
        }
    }

    #[test]
    fn test_remove_tree_missing_is_ok() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        assert!(OsFilesystem
            .remove_tree(missing.to_str().unwrap(), false)
            .is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_remove_tree_does_not_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        let keep = tmp.path().join("keep");
        fs::create_dir(&keep).unwrap();
        fs::write(keep.join("file"), b"data").unwrap();

        let doomed = tmp.path().join("doomed");
        fs::create_dir(&doomed).unwrap();
        std::os::unix::fs::symlink(&keep, doomed.join("link")).unwrap();

        OsFilesystem
            .remove_tree(doomed.to_str().unwrap(), false)
            .unwrap();
        assert!(!doomed.exists());
        assert!(keep.join("file").exists());
    }

    #[test]
    fn test_remove_tree_with_concurrent_deletions() {
        for _ in 0..20 {
            let tmp = TempDir::new().unwrap();
            let root = tmp.path().join("tree");
            fs::create_dir(&root).unwrap();
            let files: Vec<PathBuf> = (0..500).map(|i| root.join(format!("f{i:04}"))).collect();
            for file in &files {
                fs::write(file, b"").unwrap();
            }

            let racer = std::thread::spawn(move || {
                for file in files.iter().rev() {
                    let _ = fs::remove_file(file);
                }
            });
            let result = OsFilesystem.remove_tree(root.to_str().unwrap(), false);
            racer.join().unwrap();

            result.unwrap();
            assert!(!root.exists());
        }
    }

    #[test]
    fn test_remove_recursive_skips_vanished_entries() {
        let tmp = TempDir::new().unwrap();
        assert!(remove_recursive(&tmp.path().join("never-existed")).is_ok());
        assert!(ignore_vanished(fs::remove_file(tmp.path().join("gone"))).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_remove_tree_reports_failing_entry() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("tree");
        let locked = root.join("x/locked");
        fs::create_dir_all(&locked).unwrap();
        let file = locked.join("file");
        fs::write(&file, b"").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let scratch = locked.join("scratch");
        if fs::write(&scratch, b"").is_ok() {
            // Running as root: permissions are not enforced.
            fs::remove_file(&scratch).unwrap();
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let err = OsFilesystem
            .remove_tree(root.to_str().unwrap(), false)
            .unwrap_err();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(err.is_permission_denied());
        assert_eq!(err.path(), file.to_str());
    }

    #[test]
    fn test_create_temp_dir_uses_prefix() {
        let path = OsFilesystem.create_temp_dir("pathname-test-").unwrap();
        let name = Path::new(&path).file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("pathname-test-"));
        assert!(Path::new(&path).is_dir());
        OsFilesystem.remove_tree(&path, true).unwrap();
        assert!(!Path::new(&path).exists());
    }

    #[test]
    fn test_create_dir_all_and_remove_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/c");
        let nested = nested.to_str().unwrap();
        OsFilesystem.create_dir_all(nested).unwrap();
        assert!(OsFilesystem.metadata(nested).unwrap().is_dir());
        OsFilesystem.remove_dir(nested).unwrap();
        assert!(OsFilesystem.metadata(nested).unwrap_err().is_not_found());
    }
}
