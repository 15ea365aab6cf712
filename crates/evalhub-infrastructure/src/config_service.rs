//! Configuration loading.
//!
//! Reads config.toml and secret.json (both optional) and then applies
//! environment overrides on top.

use crate::paths::EvalhubPaths;
use evalhub_core::config::{AppConfig, SecretConfig};
use evalhub_core::{EvalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads [`AppConfig`] from disk and the process environment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: EvalhubPaths,
}

impl ConfigService {
    pub fn new(explicit_config: Option<PathBuf>) -> Result<Self> {
        let paths = EvalhubPaths::resolve(explicit_config)
            .map_err(|e| EvalError::config(format!("Failed to resolve config path: {e}")))?;
        Ok(Self { paths })
    }

    /// Loads the configuration, using `std::env::var` for overrides.
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read_config(self.paths.config_file())?;
        if let Some(secrets) = Self::read_secrets(&self.paths.secret_file())? {
            config.merge_secrets(secrets);
        }
        config.apply_env_overrides(lookup).map_err(EvalError::config)?;
        Ok(config)
    }

    fn read_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::info!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            EvalError::io(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = toml::from_str(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn read_secrets(path: &Path) -> Result<Option<SecretConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            EvalError::io(format!(
                "Failed to read secret file at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
