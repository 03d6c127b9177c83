//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHNAME_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Walker error policy.
pub const FIND_IGNORE_ERROR_ENV: &str = "PATHNAME_FIND_IGNORE_ERROR";
/// Removal no-op flag.
pub const RMTREE_NOOP_ENV: &str = "PATHNAME_RMTREE_NOOP";
/// Removal verbose flag.
pub const RMTREE_VERBOSE_ENV: &str = "PATHNAME_RMTREE_VERBOSE";
/// Removal secure flag.
pub const RMTREE_SECURE_ENV: &str = "PATHNAME_RMTREE_SECURE";
/// CLI output format.
pub const OUTPUT_FORMAT_ENV: &str = "PATHNAME_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathname::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `PATHNAME_*` variables and applies them with higher
    /// precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown log mode or a malformed boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(mode);
        }

        if let Ok(val) = env::var(FIND_IGNORE_ERROR_ENV) {
            let find = config.find.get_or_insert_with(Default::default);
            find.ignore_error = Some(Self::parse_bool(FIND_IGNORE_ERROR_ENV, &val)?);
        }

        Self::apply_rmtree_overrides(config)?;

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_format(&format)?);
        }

        Ok(())
    }

    /// Apply removal-related environment variable overrides.
    fn apply_rmtree_overrides(config: &mut Config) -> Result<()> {
        let mut rmtree = config.rmtree.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var(RMTREE_NOOP_ENV) {
            rmtree.noop = Some(Self::parse_bool(RMTREE_NOOP_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(RMTREE_VERBOSE_ENV) {
            rmtree.verbose = Some(Self::parse_bool(RMTREE_VERBOSE_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(RMTREE_SECURE_ENV) {
            rmtree.secure = Some(Self::parse_bool(RMTREE_SECURE_ENV, &val)?);
            modified = true;
        }

        if modified {
            config.rmtree = Some(rmtree);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_format(s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{s}' (expected text/json)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL: [&str; 6] = [
        LOG_MODE_ENV,
        FIND_IGNORE_ERROR_ENV,
        RMTREE_NOOP_ENV,
        RMTREE_VERBOSE_ENV,
        RMTREE_SECURE_ENV,
        OUTPUT_FORMAT_ENV,
    ];

    /// Run `f` with exactly `vars` set among the `PATHNAME_*` variables.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = ALL.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in ALL {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_parse_bool_valid() {
        for s in ["true", "TRUE", "1", "yes", "on"] {
            assert!(EnvironmentConfig::parse_bool("X", s).unwrap());
        }
        for s in ["false", "False", "0", "no", "off"] {
            assert!(!EnvironmentConfig::parse_bool("X", s).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("FIELD", "maybe").unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "FIELD"));
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        let config = with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        let config = with_env(
            &[
                (LOG_MODE_ENV, "quiet"),
                (FIND_IGNORE_ERROR_ENV, "no"),
                (RMTREE_SECURE_ENV, "1"),
                (OUTPUT_FORMAT_ENV, "JSON"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                config
            },
        );
        assert_eq!(config.log_mode.as_deref(), Some("quiet"));
        assert!(!config.find_options().ignore_error);
        let rm = config.rmtree_options();
        assert!(rm.secure && !rm.noop);
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_env_keeps_unset_rmtree_fields_from_file() {
        let config = with_env(&[(RMTREE_NOOP_ENV, "true")], || {
            let mut config = Config {
                rmtree: Some(crate::config::RmtreeConfig {
                    secure: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        });
        let rm = config.rmtree_options();
        assert!(rm.noop && rm.secure);
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_rejected() {
        for (key, value) in [
            (LOG_MODE_ENV, "chatty"),
            (RMTREE_VERBOSE_ENV, "perhaps"),
            (OUTPUT_FORMAT_ENV, "xml"),
        ] {
            let result = with_env(&[(key, value)], || {
                EnvironmentConfig::apply_overrides(&mut Config::default())
            });
            assert!(
                matches!(result, Err(Error::Validation { ref field, .. }) if field == key),
                "{key}={value} should be rejected"
            );
        }
    }
}
