//! Configuration system for pathname.
//!
//! This module provides hierarchical configuration with support for:
//! - A YAML user config file and an explicitly named file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! Configuration only supplies defaults: the log mode, the walker error
//! policy, the removal flags and the CLI output format. Explicit arguments
//! to library calls always win.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHNAME_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.config/pathname/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathname::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let options = config.find_options();
//! println!("find ignores errors: {}", options.ignore_error);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathname::config::{Config, ConfigBuilder, FindConfig};
//!
//! let custom = Config {
//!     find: Some(FindConfig { ignore_error: Some(false) }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.find_options().ignore_error);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, FindConfig, OutputFormat, RmtreeConfig};
pub use validator::ConfigValidator;
