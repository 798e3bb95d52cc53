//! Grid configuration.
//!
//! Loaded from a JSON file, then adjusted by the environment and the
//! command line. Every field has a default, so `{}` is a valid file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::ChipStyle;
use crate::types::{Density, Dp};

/// Environment variable overriding [`GridConfig::rows`].
pub const ROWS_ENV: &str = "SPARK_GRID_ROWS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of staggered rows.
    pub rows: usize,
    /// Cells per dp.
    pub density: f32,
    /// Distance from the top of the heading to its first baseline, in dp.
    pub baseline_target_dp: f32,
    /// Horizontal padding around each chip, in dp.
    pub chip_padding_dp: f32,
    /// Width to lay out against instead of the terminal width.
    pub max_width: Option<u32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            density: 0.125,
            baseline_target_dp: 32.0,
            chip_padding_dp: 8.0,
            max_width: None,
        }
    }
}

impl GridConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply [`ROWS_ENV`] if it is set.
    ///
    /// Only parses. Call [`validate`](Self::validate) once every override
    /// has been applied.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        match std::env::var(ROWS_ENV) {
            Ok(value) => self.override_rows(&value),
            Err(_) => Ok(()),
        }
    }

    fn override_rows(&mut self, value: &str) -> Result<(), ConfigError> {
        self.rows = value.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("{ROWS_ENV}={value:?} is not a row count"))
        })?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Invalid("rows must be at least 1".to_string()));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if self.baseline_target_dp < 0.0 || self.chip_padding_dp < 0.0 {
            return Err(ConfigError::Invalid("distances must not be negative".to_string()));
        }
        Ok(())
    }

    pub fn density(&self) -> Density {
        Density::new(self.density)
    }

    pub fn baseline_target(&self) -> Dp {
        Dp(self.baseline_target_dp)
    }

    pub fn chip_style(&self) -> ChipStyle {
        ChipStyle::with_margin(self.density(), Dp(self.chip_padding_dp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = GridConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.rows, 5);
    }

    #[test]
    fn test_partial_override() {
        let config = GridConfig::from_json_str(r#"{ "rows": 3, "max_width": 60 }"#).unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.max_width, Some(60));
        assert_eq!(config.density, 0.125);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = GridConfig::from_json_str(r#"{ "rows": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_density_rejected() {
        assert!(GridConfig::from_json_str(r#"{ "density": 0.0 }"#).is_err());
        assert!(GridConfig::from_json_str(r#"{ "density": -1.0 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = GridConfig::from_json_str("{ rows: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_chip_style_from_config() {
        let config = GridConfig {
            chip_padding_dp: 16.0,
            ..GridConfig::default()
        };
        assert_eq!(config.chip_style().margin_x, 2);
        assert_eq!(config.density().round_to_px(config.baseline_target()), 4);
    }

    #[test]
    fn test_env_rows_validated_after_later_overrides() {
        let mut config = GridConfig::default();
        config.override_rows(" 0 ").unwrap();
        assert_eq!(config.rows, 0);
        assert!(config.validate().is_err());

        // A command-line row count replaces the environment's
        config.rows = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_rows_must_be_a_number() {
        let mut config = GridConfig::default();
        let err = config.override_rows("three").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(config.rows, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GridConfig::load("/nonexistent/spark-grid.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
