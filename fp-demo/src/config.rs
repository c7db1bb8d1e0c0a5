//! Demo configuration, loaded from environment variables.

use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the number of naturals to print.
pub const PREFIX_ENV: &str = "FP_DEMO_PREFIX";

/// Number of naturals printed when [`PREFIX_ENV`] is unset.
pub const DEFAULT_PREFIX_LEN: usize = 3;

/// Largest accepted prefix. The stream is infinite, so the bound must be
/// explicit; the driver prints the prefix in time linear in this value.
pub const MAX_PREFIX_LEN: usize = 1_000_000;

/// Errors that can occur while loading a [`DemoConfig`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The prefix length is not a non-negative integer
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidPrefix {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The prefix length exceeds [`MAX_PREFIX_LEN`]
    #[error("{var} must be at most {max}, got {value}")]
    PrefixTooLarge {
        var: &'static str,
        value: usize,
        max: usize,
    },
}

/// Configuration for the demo driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// How many elements of the naturals stream to print
    pub prefix_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(PREFIX_ENV) else {
            return Ok(Self::default());
        };

        let prefix_len = raw
            .trim()
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidPrefix {
                var: PREFIX_ENV,
                value: raw.clone(),
                source,
            })?;

        if prefix_len > MAX_PREFIX_LEN {
            return Err(ConfigError::PrefixTooLarge {
                var: PREFIX_ENV,
                value: prefix_len,
                max: MAX_PREFIX_LEN,
            });
        }

        Ok(Self { prefix_len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]), Ok(DemoConfig::default()));
        assert_eq!(DemoConfig::default().prefix_len, 3);
    }

    #[test]
    fn test_reads_prefix() {
        assert_eq!(load(&[(PREFIX_ENV, "10")]).unwrap().prefix_len, 10);
        assert_eq!(load(&[(PREFIX_ENV, " 0 ")]).unwrap().prefix_len, 0);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = load(&[(PREFIX_ENV, "many")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPrefix { var: PREFIX_ENV, ref value, .. } if value == "many"
        ));
        assert_eq!(
            err.to_string(),
            format!("{PREFIX_ENV} must be a non-negative integer, got \"many\"")
        );

        assert!(matches!(
            load(&[(PREFIX_ENV, "-1")]),
            Err(ConfigError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_rejects_unbounded_prefix() {
        let err = load(&[(PREFIX_ENV, "1000001")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PrefixTooLarge {
                var: PREFIX_ENV,
                value: 1_000_001,
                max: MAX_PREFIX_LEN
            }
        );
        assert_eq!(
            err.to_string(),
            format!("{PREFIX_ENV} must be at most 1000000, got 1000001")
        );
    }
}
