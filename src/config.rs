//! Picker configuration
//!
//! Search tuning and selection rules, loaded from JSON. Every field has a
//! default, so an empty object is a valid configuration:
//!
//! ```json
//! {
//!   "search": {
//!     "limit": 10,
//!     "min_score": 25.0,
//!     "weights": {
//!       "general": {"symbol": 1.1, "name": 1.0, "localized": 0.6},
//!       "korean": {"symbol": 0.5, "name": 0.7, "localized": 1.2}
//!     }
//!   },
//!   "selection": {"capacity": 5, "gate": "non_empty"}
//! }
//! ```

use crate::ranking::{FieldWeights, SearchOptions};
use crate::selection::{SelectionConfig, MAX_CAPACITY, MIN_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} {message}")]
    InvalidValue { field: String, message: String },
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

/// Complete configuration for a [`crate::selection::StockPicker`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub search: SearchOptions,
    pub selection: SelectionConfig,
}

impl PickerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded picker config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_search(&self.search)?;
        validate_selection(&self.selection)
    }
}

/// Validate that a score or weight is a finite, non-negative number
fn validate_non_negative(value: f64, field: &str) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(invalid(field, format!("must be a finite number, got {value}")));
    }
    if value < 0.0 {
        return Err(invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn validate_weights(weights: &FieldWeights, prefix: &str) -> Result<(), ConfigError> {
    validate_non_negative(weights.symbol, &format!("{prefix}.symbol"))?;
    validate_non_negative(weights.name, &format!("{prefix}.name"))?;
    validate_non_negative(weights.localized, &format!("{prefix}.localized"))
}

pub fn validate_search(options: &SearchOptions) -> Result<(), ConfigError> {
    if options.limit == 0 {
        return Err(invalid("search.limit", "must be at least 1"));
    }
    validate_non_negative(options.min_score, "search.min_score")?;
    validate_weights(&options.weights.general, "search.weights.general")?;
    validate_weights(&options.weights.korean, "search.weights.korean")
}

pub fn validate_selection(config: &SelectionConfig) -> Result<(), ConfigError> {
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&config.capacity) {
        return Err(invalid(
            "selection.capacity",
            format!(
                "must be in range [{MIN_CAPACITY}, {MAX_CAPACITY}], got {}",
                config.capacity
            ),
        ));
    }
    if config.slot_images.len() < config.capacity {
        return Err(invalid(
            "selection.slot_images",
            format!(
                "needs at least {} entries, got {}",
                config.capacity,
                config.slot_images.len()
            ),
        ));
    }
    Ok(())
}
