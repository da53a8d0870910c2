//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a wage rate
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateConfig;

/// Loads and provides access to the wage rate configuration.
///
/// # File format
///
/// A single YAML file with one field per wage parameter; see
/// `config/default/rates.yaml` for the shipped defaults.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default/rates.yaml")?;
/// println!("Base daily wage: {}", loader.config().base_daily_wage);
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RateConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or is
    /// missing any required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded rate configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Consumes the loader, returning the rate configuration.
    pub fn into_config(self) -> RateConfig {
        self.config
    }
}
