//! Provider clients implementing [`evalhub_core::generation::TextGenerator`].

pub mod gemini_api_agent;

pub use gemini_api_agent::GeminiApiAgent;
