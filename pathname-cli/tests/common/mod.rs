//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers
//! - Fixture trees on disk

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every environment variable the binary consults.
const PATHNAME_VARS: [&str; 7] = [
    "PATHNAME_CONFIG",
    "PATHNAME_LOG_MODE",
    "PATHNAME_FIND_IGNORE_ERROR",
    "PATHNAME_RMTREE_NOOP",
    "PATHNAME_RMTREE_VERBOSE",
    "PATHNAME_RMTREE_SECURE",
    "PATHNAME_OUTPUT_FORMAT",
];

/// Test environment with an isolated home directory.
///
/// Commands run with `HOME` pointing inside the temporary directory, so the
/// developer's own `~/.config/pathname/config.yaml` is never read.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathname").expect("Failed to find pathname binary");
        cmd.env("HOME", &self.home);
        for var in PATHNAME_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create files (and their parents) below `root`.
    pub fn create_tree(&self, root: &str, files: &[&str]) -> PathBuf {
        let root = self.create_dir(root);
        for file in files {
            let path = root.join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, b"").unwrap();
        }
        root
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".config").join("pathname");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "pathname {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
