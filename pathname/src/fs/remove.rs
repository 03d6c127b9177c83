//! Recursive force-removal.

use super::FilesystemMutate;
use crate::error::Result;

/// Policy flags for [`rmtree`].
///
/// # Examples
///
/// ```
/// use pathname::RmtreeOptions;
///
/// let opts = RmtreeOptions::new().with_noop(true).with_verbose(true);
/// assert!(opts.noop);
/// assert!(!opts.secure);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RmtreeOptions {
    /// Report but do not delete.
    pub noop: bool,
    /// Print `rm -rf <path>` to stderr before acting.
    pub verbose: bool,
    /// Use the collaborator's race-resistant strategy.
    pub secure: bool,
}

impl RmtreeOptions {
    /// All flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            noop: false,
            verbose: false,
            secure: false,
        }
    }

    /// Set the no-op flag.
    #[must_use]
    pub const fn with_noop(mut self, noop: bool) -> Self {
        self.noop = noop;
        self
    }

    /// Set the verbose flag.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the secure flag.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Remove `path` recursively through `fs`, honoring `options`.
///
/// A path that is already gone counts as removed.
///
/// # Errors
///
/// Returns the collaborator's error for anything other than a missing path.
pub fn rmtree<M: FilesystemMutate + ?Sized>(
    fs: &M,
    path: &str,
    options: &RmtreeOptions,
) -> Result<()> {
    if options.verbose {
        eprintln!("rm -rf {path}");
    }
    if options.noop {
        log::debug!("rmtree {path}: noop, nothing removed");
        return Ok(());
    }

    log::debug!("rmtree {path} (secure: {})", options.secure);
    match fs.remove_tree(path, options.secure) {
        Err(e) if e.is_not_found() => Ok(()),
        other => other,
    }
}
