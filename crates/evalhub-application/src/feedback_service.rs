//! Feedback flow: merge a stored session with a vote and persist it.

use chrono::Utc;
use evalhub_core::evaluation::{EvaluationRecord, EvaluationRepository, FeedbackSubmission};
use evalhub_core::session::SessionStore;
use evalhub_core::{EvalError, Result};
use std::sync::Arc;

pub struct FeedbackService {
    session_store: Arc<dyn SessionStore>,
    repository: Arc<dyn EvaluationRepository>,
}

impl FeedbackService {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        repository: Arc<dyn EvaluationRepository>,
    ) -> Self {
        Self {
            session_store,
            repository,
        }
    }

    /// Records `feedback` against the session named by its `chat_id`.
    ///
    /// The session is left in place, so the same session can be voted on
    /// again. The selected index and text are stored as submitted.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The identifier assigned by the evaluation store
    /// - `Err(EvalError::NotFound)`: Unknown session; nothing is written
    /// - `Err(_)`: The store rejected the write
    pub async fn submit(&self, feedback: FeedbackSubmission) -> Result<String> {
        let session = self
            .session_store
            .get(&feedback.chat_id)
            .await
            .ok_or_else(|| EvalError::not_found("session", feedback.chat_id.clone()))?;

        let index = feedback.selected_response_index;
        if index < 0 || index as usize >= session.generated_texts.len() {
            tracing::warn!(
                "Selected response index {} is outside the {} responses of session {}; storing as submitted",
                index,
                session.generated_texts.len(),
                session.session_id
            );
        }

        let user_id = feedback.user_id.clone();
        let thumbs = feedback.thumbs;

        let feedback_created_at = Utc::now();
        let server_received_at = Utc::now();
        let record = EvaluationRecord::from_session(
            &session,
            feedback,
            feedback_created_at,
            server_received_at,
        );

        let evaluation_id = self.repository.insert(&record).await?;

        tracing::info!(
            "User {} selected response {} with {} rating",
            user_id,
            index,
            thumbs
        );
        Ok(evaluation_id)
    }
}
