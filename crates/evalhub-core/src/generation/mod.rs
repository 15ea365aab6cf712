//! Text generation domain: sampling configurations, provider contract and
//! the per-slot fallback policy.

pub mod generator;
pub mod sampling;

pub use generator::{GenerationError, TextGenerator};
pub use sampling::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_SAMPLING_CONFIGS, GenerationAttempt, SamplingConfig,
    fallback_text, select_configs,
};
