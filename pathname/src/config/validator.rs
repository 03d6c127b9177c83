//! Configuration validation.
//!
//! Serde already rejects unknown fields and wrong types. This module checks
//! the values serde cannot: free-form strings with a closed set of valid
//! spellings.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, ConfigValidator};
///
/// let config = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_ok());
///
/// let config = Config { log_mode: Some("loud".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|_| Error::Validation {
                field: "log_mode".into(),
                message: format!("Invalid log mode '{mode}' (expected quiet/normal/verbose)"),
            })?;
        }

        if let Some(ref rmtree) = config.rmtree {
            if rmtree.noop == Some(true) && rmtree.secure == Some(true) {
                log::debug!("rmtree.secure has no effect while rmtree.noop is set");
            }
        }

        Ok(())
    }
}
