//! Top-level Thorax configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AggregatorConfig, LoggingConfig, RuntimeConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`THORAX_*`)
/// 2. Project config (`thorax.toml` in the working root)
/// 3. User config (`~/.thorax/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThoraxConfig {
    pub aggregator: AggregatorConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

impl ThoraxConfig {
    /// Load configuration with layered resolution and validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from the user config are not
                        // fatal. Continue with defaults.
                    }
                }
            }
        }

        // Project config
        let project_config_path = root.join("thorax.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Highest priority: environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Thresholds are checked here, once, so the aggregation hot path
    /// never re-validates per call.
    pub fn validate(config: &ThoraxConfig) -> Result<(), ConfigError> {
        let unit_interval_fields = [
            ("aggregator.frame_threshold", config.aggregator.frame_threshold),
            (
                "aggregator.min_positive_fraction",
                config.aggregator.min_positive_fraction,
            ),
            (
                "aggregator.confidence_level",
                config.aggregator.confidence_level,
            ),
        ];
        for (field, value) in unit_interval_fields {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("{v} must be between 0.0 and 1.0"),
                    });
                }
            }
        }
        if let Some(budget) = config.runtime.study_budget_secs {
            if budget == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "runtime.study_budget_secs".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(threads) = config.runtime.worker_threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "runtime.worker_threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.thorax/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".thorax").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ThoraxConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ThoraxConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut ThoraxConfig, other: &ThoraxConfig) {
        // Aggregator
        if other.aggregator.frame_threshold.is_some() {
            base.aggregator.frame_threshold = other.aggregator.frame_threshold;
        }
        if other.aggregator.min_positive_fraction.is_some() {
            base.aggregator.min_positive_fraction = other.aggregator.min_positive_fraction;
        }
        if other.aggregator.confidence_level.is_some() {
            base.aggregator.confidence_level = other.aggregator.confidence_level;
        }

        // Runtime
        if other.runtime.worker_threads.is_some() {
            base.runtime.worker_threads = other.runtime.worker_threads;
        }
        if other.runtime.study_budget_secs.is_some() {
            base.runtime.study_budget_secs = other.runtime.study_budget_secs;
        }

        // Logging
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `THORAX_FRAME_THRESHOLD`, `THORAX_STUDY_BUDGET_SECS`, etc.
    fn apply_env_overrides(config: &mut ThoraxConfig) {
        if let Ok(val) = std::env::var("THORAX_FRAME_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.aggregator.frame_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("THORAX_MIN_POSITIVE_FRACTION") {
            if let Ok(v) = val.parse::<f64>() {
                config.aggregator.min_positive_fraction = Some(v);
            }
        }
        if let Ok(val) = std::env::var("THORAX_CONFIDENCE_LEVEL") {
            if let Ok(v) = val.parse::<f64>() {
                config.aggregator.confidence_level = Some(v);
            }
        }
        if let Ok(val) = std::env::var("THORAX_WORKER_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.runtime.worker_threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("THORAX_STUDY_BUDGET_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.runtime.study_budget_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("THORAX_LOG") {
            config.logging.level = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(ThoraxConfig::validate(&ThoraxConfig::default()).is_ok());
    }

    #[test]
    fn from_toml_reads_sections() {
        let config = ThoraxConfig::from_toml(
            r#"
            [aggregator]
            frame_threshold = 0.7

            [runtime]
            study_budget_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.aggregator.effective_frame_threshold(), 0.7);
        assert_eq!(config.runtime.effective_study_budget_secs(), 120);
        // Untouched sections keep compiled defaults.
        assert_eq!(config.aggregator.effective_min_positive_fraction(), 0.12);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let err = ThoraxConfig::from_toml(
            r#"
            [aggregator]
            min_positive_fraction = 1.2
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::ValidationFailed { field, .. } => {
                assert_eq!(field, "aggregator.min_positive_fraction");
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn zero_budget_rejected() {
        let err = ThoraxConfig::from_toml(
            r#"
            [runtime]
            study_budget_secs = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn project_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("thorax.toml"),
            "[aggregator]\nconfidence_level = 0.90\n",
        )
        .unwrap();
        let config = ThoraxConfig::load(dir.path()).unwrap();
        assert_eq!(config.aggregator.effective_confidence_level(), 0.90);
    }

    #[test]
    fn bad_project_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("thorax.toml"), "not = [valid").unwrap();
        let err = ThoraxConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
