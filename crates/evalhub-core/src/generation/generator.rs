//! Text-generation provider contract.

use super::sampling::SamplingConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`TextGenerator`] for a single call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The request never produced an HTTP response.
    #[error("request failed: {message}")]
    Request { message: String, retryable: bool },

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {message}")]
    Api {
        status: u16,
        message: String,
        retryable: bool,
    },

    /// The provider answered but produced no text.
    #[error("provider returned no text")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// The client is not usable (e.g. no API key).
    #[error("provider misconfigured: {0}")]
    Configuration(String),
}

impl GenerationError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { retryable, .. } | Self::Api { retryable, .. } => *retryable,
            _ => false,
        }
    }
}

/// An external provider that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier the provider is bound to.
    fn model_name(&self) -> &str;

    /// Generates one completion for `prompt` using `config`.
    async fn generate(
        &self,
        prompt: &str,
        config: &SamplingConfig,
    ) -> Result<String, GenerationError>;
}
