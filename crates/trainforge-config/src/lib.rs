//! Configuration system for TrainForge.
//!
//! Load solver configuration from TOML or YAML files to control the
//! operation cap, the enumeration strategy and the attribute priority
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use trainforge_config::{Enumeration, SolverConfig};
//! use trainforge_core::Attribute;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     max_operations = 18
//!     enumeration = "product"
//!     preferred_order = ["intellect", "strength", "agility", "focus"]
//! "#).unwrap();
//!
//! assert_eq!(config.max_operations, 18);
//! assert_eq!(config.enumeration, Enumeration::Product);
//! assert_eq!(config.preferred_order.unwrap()[0], Attribute::Intellect);
//! ```
//!
//! The operation cap has no default and must always be given:
//!
//! ```
//! use trainforge_config::SolverConfig;
//!
//! assert!(SolverConfig::from_toml_str("enumeration = \"multiset\"").is_err());
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trainforge_core::Attribute;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Longest operation sequence the solver will try.
    ///
    /// Search cost grows as `pool_size ^ max_operations`, so this is a
    /// required bound rather than a guessed default.
    pub max_operations: usize,

    /// How each depth of the search is enumerated.
    #[serde(default)]
    pub enumeration: Enumeration,

    /// Attribute priority used to order the candidate pool.
    #[serde(default)]
    pub preferred_order: Option<Vec<Attribute>>,
}

impl SolverConfig {
    /// Creates a configuration with the given operation cap.
    pub fn new(max_operations: usize) -> Self {
        Self {
            max_operations,
            enumeration: Enumeration::default(),
            preferred_order: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the operation cap.
    pub fn with_max_operations(mut self, max_operations: usize) -> Self {
        self.max_operations = max_operations;
        self
    }

    /// Sets the enumeration strategy.
    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    /// Sets the attribute priority.
    pub fn with_preferred_order(mut self, order: impl Into<Vec<Attribute>>) -> Self {
        self.preferred_order = Some(order.into());
        self
    }

    /// Checks the configuration for values the solver cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_operations == 0 {
            return Err(ConfigError::Invalid(
                "max_operations must be at least 1".to_string(),
            ));
        }

        if let Some(order) = &self.preferred_order {
            for (i, attribute) in order.iter().enumerate() {
                if order[..i].contains(attribute) {
                    return Err(ConfigError::Invalid(format!(
                        "preferred_order lists {attribute} more than once"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Enumeration strategy for each depth of the search.
///
/// Both strategies return the same sequence for the same inputs; they
/// differ only in how many tuples are visited on the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Enumeration {
    /// Non-decreasing index tuples (combinations with repetition).
    #[default]
    Multiset,

    /// Every ordered tuple (the full Cartesian product).
    Product,
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enumeration::Multiset => write!(f, "Multiset"),
            Enumeration::Product => write!(f, "Product"),
        }
    }
}

#[cfg(test)]
mod tests;
