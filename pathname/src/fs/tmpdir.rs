//! Temporary directories with guaranteed cleanup.

use super::FilesystemMutate;
use crate::error::{Error, Result};
use crate::Pathname;

/// Name prefix for directories created by [`Pathname::mktmpdir`].
pub const DEFAULT_PREFIX: &str = "pathname-";

/// Owns a temporary directory and removes it when dropped.
///
/// Dropping the guard removes the directory on every exit path, unwinding
/// included. Removal failures during drop are logged; call
/// [`TempDirGuard::close`] to observe them instead.
#[derive(Debug)]
pub struct TempDirGuard<'a, M: FilesystemMutate + ?Sized> {
    fs: &'a M,
    path: Pathname,
    armed: bool,
}

impl<'a, M: FilesystemMutate + ?Sized> TempDirGuard<'a, M> {
    /// Create a temporary directory through `fs` and guard it.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error if the directory cannot be created.
    pub fn create(fs: &'a M, prefix: &str) -> Result<Self> {
        let path = Pathname::new(&fs.create_temp_dir(prefix)?)?;
        log::debug!("created temporary directory {path}");
        Ok(Self {
            fs,
            path,
            armed: true,
        })
    }

    /// The guarded directory.
    #[must_use]
    pub fn path(&self) -> &Pathname {
        &self.path
    }

    /// Remove the directory now and report the outcome.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's removal error.
    pub fn close(mut self) -> Result<()> {
        self.armed = false;
        self.fs.remove_tree(self.path.as_str(), true)
    }

    /// Stop guarding and hand the directory to the caller.
    #[must_use]
    pub fn into_path(mut self) -> Pathname {
        self.armed = false;
        self.path.clone()
    }
}

impl<M: FilesystemMutate + ?Sized> Drop for TempDirGuard<'_, M> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = self.fs.remove_tree(self.path.as_str(), true) {
            log::warn!("failed to remove temporary directory {}: {e}", self.path);
        }
    }
}

/// Run `f` with a fresh temporary directory, then remove the directory.
///
/// When `f` succeeds a removal failure becomes the result. When `f` fails
/// its error is returned and a removal failure is only logged.
///
/// # Errors
///
/// Returns creation errors, the callback's error, or the removal error.
pub fn with_temp_dir<M, T, E, F>(fs: &M, prefix: &str, f: F) -> std::result::Result<T, E>
where
    M: FilesystemMutate + ?Sized,
    E: From<Error>,
    F: FnOnce(&Pathname) -> std::result::Result<T, E>,
{
    let guard = TempDirGuard::create(fs, prefix)?;
    let outcome = f(guard.path());
    match outcome {
        Ok(value) => {
            guard.close()?;
            Ok(value)
        }
        Err(e) => {
            drop(guard);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Tracker {
        created: RefCell<Vec<String>>,
        removed: RefCell<Vec<String>>,
        fail_removal: bool,
    }

    impl FilesystemMutate for Tracker {
        fn remove_tree(&self, path: &str, _secure: bool) -> Result<()> {
            self.removed.borrow_mut().push(path.to_string());
            if self.fail_removal {
                return Err(Error::PermissionDenied {
                    path: path.to_string(),
                });
            }
            Ok(())
        }

        fn remove_dir(&self, _path: &str) -> Result<()> {
            Ok(())
        }

        fn create_dir_all(&self, _path: &str) -> Result<()> {
            Ok(())
        }

        fn create_temp_dir(&self, prefix: &str) -> Result<String> {
            let path = format!("/tmp/{prefix}{}", self.created.borrow().len());
            self.created.borrow_mut().push(path.clone());
            Ok(path)
        }
    }

    #[test]
    fn test_guard_removes_on_drop() {
        let fs = Tracker::default();
        {
            let guard = TempDirGuard::create(&fs, "t-").unwrap();
            assert_eq!(guard.path().as_str(), "/tmp/t-0");
        }
        assert_eq!(*fs.removed.borrow(), vec!["/tmp/t-0".to_string()]);
    }

    #[test]
    fn test_into_path_disarms_guard() {
        let fs = Tracker::default();
        let path = TempDirGuard::create(&fs, "t-").unwrap().into_path();
        assert_eq!(path.as_str(), "/tmp/t-0");
        assert!(fs.removed.borrow().is_empty());
    }

    #[test]
    fn test_with_temp_dir_success_cleans_up() {
        let fs = Tracker::default();
        let seen = with_temp_dir(&fs, "t-", |dir| Ok::<_, Error>(dir.to_string())).unwrap();
        assert_eq!(seen, "/tmp/t-0");
        assert_eq!(fs.removed.borrow().len(), 1);
    }

    #[test]
    fn test_with_temp_dir_error_cleans_up_and_keeps_callback_error() {
        let fs = Tracker {
            fail_removal: true,
            ..Tracker::default()
        };
        let err = with_temp_dir(&fs, "t-", |_| -> Result<()> {
            Err(Error::Argument {
                details: "boom".to_string(),
            })
        })
        .unwrap_err();
        assert!(err.is_argument());
        assert_eq!(fs.removed.borrow().len(), 1);
    }

    #[test]
    fn test_with_temp_dir_reports_cleanup_failure_after_success() {
        let fs = Tracker {
            fail_removal: true,
            ..Tracker::default()
        };
        let err = with_temp_dir(&fs, "t-", |_| Ok::<_, Error>(())).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_with_temp_dir_cleans_up_on_panic() {
        let fs = Tracker::default();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: Result<()> = with_temp_dir(&fs, "t-", |_| panic!("callback panicked"));
        }));
        assert!(outcome.is_err());
        assert_eq!(*fs.removed.borrow(), vec!["/tmp/t-0".to_string()]);
    }
}
