use serde::{Deserialize, Serialize};

/// Output cap applied to every sampling configuration.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

/// A fixed (temperature, max-length) pair used for one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    pub const fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }
}

/// Low, medium and high temperature, in that order.
pub const DEFAULT_SAMPLING_CONFIGS: [SamplingConfig; 3] = [
    SamplingConfig::new(0.3, DEFAULT_MAX_OUTPUT_TOKENS),
    SamplingConfig::new(0.7, DEFAULT_MAX_OUTPUT_TOKENS),
    SamplingConfig::new(0.9, DEFAULT_MAX_OUTPUT_TOKENS),
];

/// Returns the first `num_responses` default configurations.
///
/// Counts above three select all three (the caller silently receives fewer
/// texts than requested). Zero or negative counts select none.
pub fn select_configs(num_responses: i64) -> &'static [SamplingConfig] {
    let take = num_responses.clamp(0, DEFAULT_SAMPLING_CONFIGS.len() as i64) as usize;
    &DEFAULT_SAMPLING_CONFIGS[..take]
}

/// Placeholder text substituted for a slot whose provider call failed.
///
/// `slot` is 1-based.
pub fn fallback_text(prompt: &str, slot: usize) -> String {
    format!("Response {slot}: This is a sample response for '{prompt}'")
}

/// Outcome of a single provider call for one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationAttempt {
    Generated(String),
    /// `slot` is 1-based.
    Failed { slot: usize, reason: String },
}

impl GenerationAttempt {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Resolves the attempt to the text shown to the caller, substituting the
    /// fallback for failed slots.
    pub fn into_text(self, prompt: &str) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Failed { slot, .. } => fallback_text(prompt, slot),
        }
    }
}
