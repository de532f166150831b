use std::path::Path;

use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::file_operations::{atomic_save_json, read_json, FileOperationError};

pub const INTERSECT_CONFIG_FILE: &str = "intersect_config.json";

pub const DEFAULT_GALLOPING_MIN_RATIO: f64 = 10.0;
pub const DEFAULT_BINARY_SEARCH_MIN_RATIO: f64 = 4.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid IntersectConfig: '{0}'")]
    InvalidConfig(#[from] ValidationErrors),

    #[error(transparent)]
    FileOperationError(#[from] FileOperationError),
}

/// Size-ratio thresholds used by [`IntersectionSelector`](crate::core::intersect::IntersectionSelector).
///
/// `ratio` is `larger.size() / smaller.size()`:
/// - `ratio >= galloping_min_ratio` uses galloping search.
/// - `ratio >= binary_search_min_ratio` uses binary search on the remainder.
/// - anything below falls back to the linear merge.
#[derive(Serialize, Deserialize, Debug, PartialEq, Copy, Clone, TypedBuilder)]
#[serde(default, rename_all = "snake_case")]
pub struct IntersectConfig {
    #[builder(default = DEFAULT_GALLOPING_MIN_RATIO)]
    #[serde(rename = "galloping_ratio")]
    pub galloping_min_ratio: f64,

    #[builder(default = DEFAULT_BINARY_SEARCH_MIN_RATIO)]
    #[serde(rename = "binary_search_ratio")]
    pub binary_search_min_ratio: f64,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        IntersectConfig::builder().build()
    }
}

impl Validate for IntersectConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !(self.galloping_min_ratio >= 1.0) {
            errors.add("galloping_ratio", ValidationError::new("must be a number >= 1.0"));
        }
        if !(self.binary_search_min_ratio >= 1.0) {
            errors.add("binary_search_ratio", ValidationError::new("must be a number >= 1.0"));
        }
        if self.binary_search_min_ratio > self.galloping_min_ratio {
            errors.add("binary_search_ratio", ValidationError::new("must not exceed galloping_ratio"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl IntersectConfig {
    pub fn new(galloping_min_ratio: f64, binary_search_min_ratio: f64) -> Result<Self, ConfigError> {
        let config = IntersectConfig { galloping_min_ratio, binary_search_min_ratio };
        config.validate().map_err(|e| {
            error!("Rejecting IntersectConfig {:?}: {}", config, e);
            ConfigError::InvalidConfig(e)
        })?;
        Ok(config)
    }

    pub fn load(config_directory: &Path) -> Result<Self, ConfigError> {
        let file_path = config_directory.join(INTERSECT_CONFIG_FILE);
        let config: IntersectConfig = read_json(&file_path)?;
        config.validate().map_err(|e| {
            error!("Invalid IntersectConfig loaded from {:?}: {}", file_path, e);
            ConfigError::InvalidConfig(e)
        })?;
        Ok(config)
    }

    pub fn save(&self, config_directory: &Path) -> Result<(), ConfigError> {
        self.validate().map_err(|e| {
            error!("Refusing to save invalid IntersectConfig {:?}: {}", self, e);
            ConfigError::InvalidConfig(e)
        })?;
        let file_path = config_directory.join(INTERSECT_CONFIG_FILE);
        if !config_directory.exists() {
            std::fs::create_dir_all(config_directory).map_err(|e| {
                error!("Failed to create config directory {:?}: {}", config_directory, e);
                FileOperationError::IoError(e)
            })?;
        }
        atomic_save_json(&file_path, self).map_err(|e| {
            error!("Failed to save IntersectConfig to {:?}: {}", file_path, e);
            ConfigError::FileOperationError(e)
        })
    }
}
