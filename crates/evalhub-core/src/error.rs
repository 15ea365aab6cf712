//! Error types for the EvalHub service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generation::GenerationError;

/// A shared error type for the entire EvalHub service.
///
/// Every failure is scoped to a single request; the HTTP layer maps the
/// variants onto status categories (not-found, unavailable, internal).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum EvalError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The text-generation provider could not be used at all
    #[error("Generation error: {0}")]
    Generation(String),

    /// Data access error (evaluation store)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// A dependency is unreachable (e.g. liveness probe failed)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EvalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Unavailable error
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for EvalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<GenerationError> for EvalError {
    fn from(err: GenerationError) -> Self {
        Self::Generation(err.to_string())
    }
}

/// Conversion from anyhow::Error (used at the infrastructure boundary)
impl From<anyhow::Error> for EvalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, EvalError>`.
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EvalError::not_found("session", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: session 'abc'");
    }

    #[test]
    fn test_generation_error_conversion() {
        let err: EvalError = GenerationError::Configuration("missing api key".into()).into();
        assert!(matches!(err, EvalError::Generation(_)));
        assert!(err.to_string().contains("missing api key"));
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EvalError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }
}
