//! Path management for evalhub configuration files.
//!
//! ```text
//! ~/.config/evalhub/
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys and connection strings
//! ```
//!
//! `EVALHUB_CONFIG` points at an alternative config.toml; secret.json is then
//! looked up next to it.

use std::path::PathBuf;

const APP_DIR: &str = "evalhub";
const CONFIG_ENV: &str = "EVALHUB_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved locations of the configuration files.
#[derive(Debug, Clone)]
pub struct EvalhubPaths {
    config_file: PathBuf,
}

impl EvalhubPaths {
    /// Uses `explicit` when given, then `EVALHUB_CONFIG`, then the default
    /// `~/.config/evalhub/config.toml`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, PathError> {
        let config_file = match explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        {
            Some(path) => path,
            None => Self::config_dir()?.join("config.toml"),
        };
        Ok(Self { config_file })
    }

    /// Returns the evalhub configuration directory (`~/.config/evalhub/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeDirNotFound)?;
        Ok(home.join(".config").join(APP_DIR))
    }

    pub fn config_file(&self) -> &PathBuf {
        &self.config_file
    }

    /// secret.json, next to config.toml.
    pub fn secret_file(&self) -> PathBuf {
        self.config_file
            .parent()
            .map(|dir| dir.join("secret.json"))
            .unwrap_or_else(|| PathBuf::from("secret.json"))
    }
}
