//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Nested sections merge field by field, so a higher source that sets only
//! `rmtree.noop` keeps a lower source's `rmtree.secure`.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, FindConfig, RmtreeConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        // Process in order (lowest to highest precedence)
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested configs: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref find) = source.find {
            Self::merge_find(target.find.get_or_insert_with(Default::default), find);
        }

        if let Some(ref rmtree) = source.rmtree {
            Self::merge_rmtree(target.rmtree.get_or_insert_with(Default::default), rmtree);
        }
    }

    fn merge_find(target: &mut FindConfig, source: &FindConfig) {
        if source.ignore_error.is_some() {
            target.ignore_error = source.ignore_error;
        }
    }

    fn merge_rmtree(target: &mut RmtreeConfig, source: &RmtreeConfig) {
        if source.noop.is_some() {
            target.noop = source.noop;
        }
        if source.verbose.is_some() {
            target.verbose = source.verbose;
        }
        if source.secure.is_some() {
            target.secure = source.secure;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/cfg/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config {
            log_mode: Some("quiet".to_string()),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let source = Config {
            log_mode: Some("verbose".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.log_mode.as_deref(), Some("verbose"));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_nested_field_by_field() {
        let mut target = Config {
            rmtree: Some(RmtreeConfig {
                secure: Some(true),
                verbose: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let source = Config {
            rmtree: Some(RmtreeConfig {
                noop: Some(true),
                verbose: Some(false),
                ..Default::default()
            }),
            find: Some(FindConfig {
                ignore_error: Some(false),
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        let rm = target.rmtree.unwrap();
        assert_eq!(rm.noop, Some(true));
        assert_eq!(rm.verbose, Some(false));
        assert_eq!(rm.secure, Some(true));
        assert_eq!(target.find.unwrap().ignore_error, Some(false));
    }

    #[test]
    fn test_merge_sources_in_order() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    log_mode: Some("quiet".to_string()),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    log_mode: Some("normal".to_string()),
                    ..Default::default()
                },
            ),
        ]);
        assert_eq!(merged.log_mode.as_deref(), Some("normal"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn opt_bool() -> impl Strategy<Value = Option<bool>> {
            prop::option::of(any::<bool>())
        }

        fn config_strategy() -> impl Strategy<Value = Config> {
            (
                prop::option::of(prop_oneof![
                    Just("quiet".to_string()),
                    Just("normal".to_string()),
                    Just("verbose".to_string()),
                ]),
                prop::option::of(opt_bool().prop_map(|ignore_error| FindConfig { ignore_error })),
                prop::option::of((opt_bool(), opt_bool(), opt_bool()).prop_map(
                    |(noop, verbose, secure)| RmtreeConfig {
                        noop,
                        verbose,
                        secure,
                    },
                )),
            )
                .prop_map(|(log_mode, find, rmtree)| Config {
                    log_mode,
                    find,
                    rmtree,
                    output_format: None,
                })
        }

        proptest! {
            /// Property: Merging with empty Config is identity operation
            #[test]
            fn prop_merge_empty_is_identity(config in config_strategy()) {
                let mut merged = config.clone();
                ConfigMerger::merge_into(&mut merged, &Config::default());
                prop_assert_eq!(merged, config);
            }

            /// Property: Source always overwrites target for Some values
            #[test]
            fn prop_merge_source_wins(target in config_strategy(), source in config_strategy()) {
                let mut merged = target.clone();
                ConfigMerger::merge_into(&mut merged, &source);
                if source.log_mode.is_some() {
                    prop_assert_eq!(&merged.log_mode, &source.log_mode);
                }
                if let Some(secure) = source.rmtree.as_ref().and_then(|r| r.secure) {
                    prop_assert_eq!(merged.rmtree_options().secure, secure);
                }
            }

            /// Property: Merging is idempotent
            #[test]
            fn prop_merge_idempotent(target in config_strategy(), source in config_strategy()) {
                let mut once = target;
                ConfigMerger::merge_into(&mut once, &source);
                let mut twice = once.clone();
                ConfigMerger::merge_into(&mut twice, &source);
                prop_assert_eq!(twice, once);
            }
        }
    }
}
