//! Generator configuration.

use std::env::{self, VarError};

use serde::Deserialize;

use crate::error::RandomError;
use crate::rng::StdSource;

/// Environment variable holding the base seed.
pub const SEED_ENV_VAR: &str = "RANDOMEXT_SEED";

/// Seeding configuration for lazily created instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RandomConfig {
    /// Base seed. `None` means every instance is seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Creates a configuration with a fixed base seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Config` if `RANDOMEXT_SEED` is set but is not
    /// valid unicode or not a valid `u64`.
    pub fn from_env() -> Result<Self, RandomError> {
        match env::var(SEED_ENV_VAR) {
            Ok(raw) => Self::from_value(Some(&raw)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(_)) => Err(RandomError::Config(format!(
                "{SEED_ENV_VAR} must be valid unicode"
            ))),
        }
    }

    /// Builds the configuration from a raw seed value, if any.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Config` if `raw` is not a valid `u64`.
    pub fn from_value(raw: Option<&str>) -> Result<Self, RandomError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let seed = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| RandomError::Config(format!("{SEED_ENV_VAR} must be a valid u64: {e}")))?;
        Ok(Self::with_seed(seed))
    }

    /// Creates a source seeded from this configuration.
    #[must_use]
    pub fn source(&self) -> StdSource {
        match self.seed {
            Some(seed) => StdSource::seeded(seed),
            None => StdSource::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::UniformSource;

    #[test]
    fn test_from_value_without_seed_is_default() {
        let config = RandomConfig::from_value(None).unwrap();
        assert_eq!(config, RandomConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_value_parses_seed() {
        let config = RandomConfig::from_value(Some(" 1234 ")).unwrap();
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_from_value_rejects_garbage() {
        let result = RandomConfig::from_value(Some("not-a-seed"));
        match result {
            Err(RandomError::Config(msg)) => {
                assert!(msg.starts_with("RANDOMEXT_SEED must be a valid u64"), "{msg}");
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_rejects_negative_seed() {
        assert!(RandomConfig::from_value(Some("-1")).is_err());
    }

    #[test]
    fn test_deserialize_with_and_without_seed() {
        let empty: RandomConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.seed, None);

        let seeded: RandomConfig = serde_json::from_str(r#"{"seed": 99}"#).unwrap();
        assert_eq!(seeded, RandomConfig::with_seed(99));
    }

    #[test]
    fn test_seeded_config_produces_reproducible_sources() {
        let config = RandomConfig::with_seed(5);
        let mut a = config.source();
        let mut b = config.source();
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
