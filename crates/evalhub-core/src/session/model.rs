use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh session identifier (UUID v4, hyphenated).
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// The prompt and generated texts of one generation call.
///
/// Created by the generation flow, read (never mutated) by the feedback flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Lookup key; surfaced to callers as `chat_id`.
    pub session_id: String,
    /// The original user prompt.
    pub prompt: String,
    /// One text per sampling configuration attempted, in generation order.
    pub generated_texts: Vec<String>,
    /// Model name requested by the caller. Informational only.
    pub model_name: String,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        session_id: impl Into<String>,
        prompt: impl Into<String>,
        generated_texts: Vec<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            prompt: prompt.into(),
            generated_texts,
            model_name: model_name.into(),
            created_at: Utc::now(),
        }
    }
}
