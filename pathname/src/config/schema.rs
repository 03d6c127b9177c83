//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathname: the
//! default log mode, the default walker policy, the default removal policy
//! and the CLI output format.

use serde::{Deserialize, Serialize};

use crate::fs::RmtreeOptions;
use crate::logging::LogLevel;
use crate::path::FindOptions;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the library defaults.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, RmtreeConfig};
///
/// let config = Config {
///     log_mode: Some("verbose".to_string()),
///     rmtree: Some(RmtreeConfig {
///         secure: Some(true),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(config.rmtree_options().secure);
/// assert!(config.find_options().ignore_error);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log mode: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,

    /// Tree walker defaults.
    pub find: Option<FindConfig>,

    /// Recursive removal defaults.
    pub rmtree: Option<RmtreeConfig>,

    /// Output format for CLI commands.
    pub output_format: Option<OutputFormat>,
}

/// Tree walker settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FindConfig {
    /// Skip unreadable entries instead of stopping.
    pub ignore_error: Option<bool>,
}

/// Recursive removal settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RmtreeConfig {
    /// Report but do not delete.
    pub noop: Option<bool>,
    /// Print each removal to stderr.
    pub verbose: Option<bool>,
    /// Use race-resistant removal.
    pub secure: Option<bool>,
}

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// The configured log level, if one is set and valid.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }

    /// Walker options with unset fields at their defaults.
    #[must_use]
    pub fn find_options(&self) -> FindOptions {
        let mut options = FindOptions::default();
        if let Some(ignore) = self.find.as_ref().and_then(|f| f.ignore_error) {
            options = options.with_ignore_error(ignore);
        }
        options
    }

    /// Removal options with unset fields at their defaults.
    #[must_use]
    pub fn rmtree_options(&self) -> RmtreeOptions {
        let rm = self.rmtree.clone().unwrap_or_default();
        RmtreeOptions::new()
            .with_noop(rm.noop.unwrap_or(false))
            .with_verbose(rm.verbose.unwrap_or(false))
            .with_secure(rm.secure.unwrap_or(false))
    }
}
