//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading severance
//! rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, SeveranceConfig, SeverancePolicy};

/// Loads and provides access to severance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── jurisdiction.yaml   # Rule set metadata
/// └── rules.yaml          # FGTS, notice, accrual and predicted-value parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Loaded rules: {}", loader.jurisdiction().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SeveranceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A rate or day count is out of range (`InvalidPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use severance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), severance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let policy = Self::load_yaml::<SeverancePolicy>(&path.join("rules.yaml"))?;
        policy.validate()?;

        Ok(Self {
            config: SeveranceConfig::new(metadata, policy),
        })
    }

    /// Builds a loader around the built-in statutory defaults.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SeveranceConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the statutory parameters.
    pub fn policy(&self) -> &SeverancePolicy {
        self.config.policy()
    }
}
