use crate::session::SessionRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary preference vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thumbs {
    Up,
    Down,
}

impl Thumbs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Thumbs::Up => "up",
            Thumbs::Down => "down",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Thumbs::Up)
    }
}

impl fmt::Display for Thumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied feedback about one generated response.
///
/// `selected_response_index` and `selected_response_text` are trusted as
/// given: neither is checked against the stored session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    /// Session ID returned by the generation call.
    pub chat_id: String,
    pub selected_response_index: i64,
    pub selected_response_text: String,
    pub thumbs: Thumbs,
    #[serde(default)]
    pub feedback_text: Option<String>,
    pub user_id: String,
    /// Caller-side grouping identifier, unrelated to `chat_id`.
    pub session_id: String,
}

/// The durable document combining a session's context with a vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub user_prompt: String,
    pub all_responses: Vec<String>,
    pub selected_response_index: i64,
    pub selected_response_text: String,

    pub thumbs: Thumbs,
    pub feedback_text: Option<String>,

    pub user_id: String,
    pub session_id: String,
    pub chat_id: String,
    pub model_used: String,

    pub prompt_created_at: DateTime<Utc>,
    pub responses_created_at: DateTime<Utc>,
    pub feedback_created_at: DateTime<Utc>,
    pub server_received_at: DateTime<Utc>,

    pub total_responses_shown: usize,
}

impl EvaluationRecord {
    /// Merges a stored session with submitted feedback.
    ///
    /// The two timestamps are captured separately by the caller and kept as
    /// distinct fields even when they are effectively the same instant.
    pub fn from_session(
        session: &SessionRecord,
        feedback: FeedbackSubmission,
        feedback_created_at: DateTime<Utc>,
        server_received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_prompt: session.prompt.clone(),
            all_responses: session.generated_texts.clone(),
            selected_response_index: feedback.selected_response_index,
            selected_response_text: feedback.selected_response_text,
            thumbs: feedback.thumbs,
            feedback_text: feedback.feedback_text,
            user_id: feedback.user_id,
            session_id: feedback.session_id,
            chat_id: feedback.chat_id,
            model_used: session.model_name.clone(),
            prompt_created_at: session.created_at,
            responses_created_at: session.created_at,
            feedback_created_at,
            server_received_at,
            total_responses_shown: session.generated_texts.len(),
        }
    }
}
