//! Kitchen configuration
//!
//! Loaded from TOML, every key optional:
//!
//! ```toml
//! on_invalid_record = "abort"
//!
//! [bag]
//! capacity = 100
//! allow_duplicates = false
//!
//! [dietary]
//! vegetarian = true
//! low_sugar = true
//! ```

use std::path::{Path, PathBuf};

use bistro_menu::DietaryRequest;
use serde::{Deserialize, Serialize};

use crate::bag::BagPolicy;

/// What loading does with a record that fails to decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRecordPolicy {
    /// Log a warning and keep loading
    #[default]
    Skip,
    /// Stop loading and return the error
    Abort,
}

/// Kitchen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Admission policy of the dish bag
    pub bag: BagPolicy,
    /// Handling of undecodable records during load
    pub on_invalid_record: InvalidRecordPolicy,
    /// Standing dietary request, merged with any given on the command line
    pub dietary: DietaryRequest,
}

impl KitchenConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With bag policy
    #[inline]
    #[must_use]
    pub fn with_bag(mut self, bag: BagPolicy) -> Self {
        self.bag = bag;
        self
    }

    /// With invalid-record policy
    #[inline]
    #[must_use]
    pub fn with_invalid_record_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.on_invalid_record = policy;
        self
    }

    /// With standing dietary request
    #[inline]
    #[must_use]
    pub fn with_dietary(mut self, dietary: DietaryRequest) -> Self {
        self.dietary = dietary;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or has unexpected value types
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Text is not a valid configuration
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(KitchenConfig::from_toml_str("").unwrap(), KitchenConfig::default());
    }

    #[test]
    fn full_toml() {
        let config = KitchenConfig::from_toml_str(
            r#"
            on_invalid_record = "abort"

            [bag]
            capacity = 25
            allow_duplicates = true

            [dietary]
            nut_free = true
            "#,
        )
        .unwrap();

        assert_eq!(config.on_invalid_record, InvalidRecordPolicy::Abort);
        assert_eq!(config.bag.capacity, Some(25));
        assert!(config.bag.allow_duplicates);
        assert_eq!(config.dietary, DietaryRequest::new().with_nut_free(true));
    }

    #[test]
    fn invalid_toml() {
        let err = KitchenConfig::from_toml_str("on_invalid_record = \"explode\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToml(_)));
    }

    #[test]
    fn missing_file() {
        let err = KitchenConfig::from_toml_path("/no/such/kitchen.toml").unwrap_err();
        assert!(err.to_string().starts_with("io error reading /no/such/kitchen.toml"));
    }
}
