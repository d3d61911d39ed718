//! Top-level Ascent configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ScoringConfig, StorageConfig, TrendConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ASCENT_*`)
/// 2. Project config (`ascent.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AscentConfig {
    pub scoring: ScoringConfig,
    pub trends: TrendConfig,
    pub storage: StorageConfig,
}

impl AscentConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("ascent.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

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
    pub fn validate(config: &AscentConfig) -> Result<(), ConfigError> {
        if let Some(floor) = config.scoring.score_floor {
            if !(0.0..1.0).contains(&floor) {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.score_floor".to_string(),
                    message: "must be in [0.0, 1.0)".to_string(),
                });
            }
        }
        if let Some(step) = config.scoring.min_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.min_step".to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        if let Some(window) = config.scoring.synergy_window {
            if !window.is_finite() || window < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.synergy_window".to_string(),
                    message: "must be non-negative".to_string(),
                });
            }
        }
        if !config.scoring.weights.is_empty() {
            let mut sum = 0.0;
            for (environment, weight) in &config.scoring.weights {
                if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("scoring.weights.{environment}"),
                        message: "must be in [0.0, 1.0]".to_string(),
                    });
                }
                sum += weight;
            }
            if (sum - 1.0).abs() > 1e-6 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.weights".to_string(),
                    message: format!("must sum to 1.0, got {sum}"),
                });
            }
        }
        if let Some(window) = config.trends.trend_window {
            if window < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "trends.trend_window".to_string(),
                    message: "must be at least 2".to_string(),
                });
            }
        }
        if let Some(window) = config.trends.stats_window {
            if window == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "trends.stats_window".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut AscentConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AscentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut AscentConfig, other: &AscentConfig) {
        if !other.scoring.weights.is_empty() {
            base.scoring.weights = other.scoring.weights.clone();
        }
        if other.scoring.score_floor.is_some() {
            base.scoring.score_floor = other.scoring.score_floor;
        }
        if other.scoring.min_step.is_some() {
            base.scoring.min_step = other.scoring.min_step;
        }
        if other.scoring.synergy_window.is_some() {
            base.scoring.synergy_window = other.scoring.synergy_window;
        }
        if other.scoring.fill_missing_with_floor.is_some() {
            base.scoring.fill_missing_with_floor = other.scoring.fill_missing_with_floor;
        }

        if other.trends.trend_window.is_some() {
            base.trends.trend_window = other.trends.trend_window;
        }
        if other.trends.stats_window.is_some() {
            base.trends.stats_window = other.trends.stats_window;
        }

        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ASCENT_DB_PATH`, `ASCENT_TREND_WINDOW`, etc.
    fn apply_env_overrides(config: &mut AscentConfig) {
        if let Ok(val) = std::env::var("ASCENT_DB_PATH") {
            config.storage.db_path = Some(val.into());
        }
        if let Ok(val) = std::env::var("ASCENT_TREND_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.trends.trend_window = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASCENT_STATS_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.trends.stats_window = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASCENT_MIN_STEP") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.min_step = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ASCENT_FILL_MISSING_WITH_FLOOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.scoring.fill_missing_with_floor = Some(v);
            }
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
