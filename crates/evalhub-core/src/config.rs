//! Configuration model for EvalHub.
//!
//! `config.toml` deserializes into [`AppConfig`]; API keys may live in
//! `secret.json` ([`SecretConfig`]). Environment variables take precedence
//! over both, see [`AppConfig::apply_env_overrides`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_APP_NAME: &str = "LLM Evaluation API";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub app_version: String,
    pub storage: StorageBackend,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub gemini: GeminiConfig,
    pub session_store: SessionStoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            storage: StorageBackend::default(),
            server: ServerConfig::default(),
            mongodb: MongoConfig::default(),
            gemini: GeminiConfig::default(),
            session_store: SessionStoreConfig::default(),
        }
    }
}

/// Which evaluation repository backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    MongoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub url: String,
    pub database_name: String,
    pub collection_name: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database_name: "citrust".to_string(),
            collection_name: "evaluations".to_string(),
        }
    }
}

/// Gemini API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model_name: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

/// Bounds for the session store. Both unset means unbounded, never expiring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStoreConfig {
    pub max_entries: Option<usize>,
    pub ttl_secs: Option<u64>,
}

impl SessionStoreConfig {
    pub fn is_bounded(&self) -> bool {
        self.max_entries.is_some() || self.ttl_secs.is_some()
    }
}

/// Root structure of secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
    #[serde(default)]
    pub mongodb: Option<MongoSecret>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoSecret {
    pub url: String,
}

impl AppConfig {
    /// Fills secrets from secret.json where config.toml left them unset.
    pub fn merge_secrets(&mut self, secrets: SecretConfig) {
        if self.gemini.api_key.is_none() {
            self.gemini.api_key = secrets.gemini.map(|g| g.api_key);
        }
        if let Some(mongo) = secrets.mongodb {
            self.mongodb.url = mongo.url;
        }
    }

    /// Applies environment overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EVALHUB_APP_NAME") {
            self.app_name = v;
        }
        if let Some(v) = lookup("EVALHUB_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("EVALHUB_PORT") {
            self.server.port = v
                .parse()
                .map_err(|e| format!("Invalid EVALHUB_PORT value '{v}': {e}"))?;
        }
        if let Some(v) = lookup("EVALHUB_STORAGE") {
            self.storage = v.parse()?;
        }
        if let Some(v) = lookup("MONGODB_URL") {
            self.mongodb.url = v;
        }
        if let Some(v) = lookup("DATABASE_NAME") {
            self.mongodb.database_name = v;
        }
        if let Some(v) = lookup("COLLECTION_NAME") {
            self.mongodb.collection_name = v;
        }
        if let Some(v) = lookup("GEMINI_API_KEY") {
            self.gemini.api_key = Some(v);
        }
        if let Some(v) = lookup("GEMINI_MODEL") {
            self.gemini.model_name = v;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_service_contract() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "LLM Evaluation API");
        assert_eq!(config.mongodb.database_name, "citrust");
        assert_eq!(config.mongodb.collection_name, "evaluations");
        assert_eq!(config.gemini.model_name, "gemini-2.0-flash");
        assert_eq!(config.server.address(), "0.0.0.0:8000");
        assert!(!config.session_store.is_bounded());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            storage = "memory"

            [server]
            port = 9000

            [session_store]
            ttl_secs = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.session_store.ttl_secs, Some(600));
        assert!(config.session_store.is_bounded());
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("EVALHUB_PORT", "8123"),
            ("GEMINI_API_KEY", "key"),
            ("DATABASE_NAME", "other"),
            ("EVALHUB_STORAGE", "memory"),
        ]);
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.gemini.api_key.as_deref(), Some("key"));
        assert_eq!(config.mongodb.database_name, "other");
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|k| {
            (k == "EVALHUB_PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_secrets_fill_missing_key_only() {
        let mut config = AppConfig::default();
        config.merge_secrets(SecretConfig {
            gemini: Some(GeminiSecret {
                api_key: "from-secret".into(),
            }),
            mongodb: None,
        });
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-secret"));

        config.merge_secrets(SecretConfig {
            gemini: Some(GeminiSecret {
                api_key: "ignored".into(),
            }),
            mongodb: Some(MongoSecret {
                url: "mongodb://db:27017".into(),
            }),
        });
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-secret"));
        assert_eq!(config.mongodb.url, "mongodb://db:27017");
    }
}
