//! Generation flow: one provider call per selected sampling configuration,
//! then a session record so the caller can vote on the result.

use evalhub_core::generation::{
    GenerationAttempt, GenerationError, SamplingConfig, TextGenerator, select_configs,
};
use evalhub_core::session::model::new_session_id;
use evalhub_core::session::{SessionRecord, SessionStore};
use evalhub_core::{EvalError, Result};
use std::sync::Arc;

/// Result of a successful generation call.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub session_id: String,
    pub prompt: String,
    /// In configuration order (low to high temperature).
    pub responses: Vec<String>,
    /// 1-based slots that were filled with fallback text.
    pub failed_slots: Vec<usize>,
}

/// Orchestrates provider calls and populates the session store.
pub struct GenerationService {
    /// `Err` when the provider client could not be constructed; every
    /// request then fails without touching the session store.
    generator: std::result::Result<Arc<dyn TextGenerator>, GenerationError>,
    session_store: Arc<dyn SessionStore>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            generator: Ok(generator),
            session_store,
        }
    }

    /// A service whose provider is unusable, e.g. because no API key is set.
    pub fn without_generator(reason: GenerationError, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            generator: Err(reason),
            session_store,
        }
    }

    /// Generates up to `num_responses` texts (at most three) and stores them
    /// under a fresh session ID.
    ///
    /// A failing provider call does not fail the request: its slot receives
    /// the fallback text.
    ///
    /// # Errors
    ///
    /// [`EvalError::Generation`] when the provider client is unusable. No
    /// session is stored in that case.
    pub async fn generate(
        &self,
        prompt: &str,
        model_used: &str,
        num_responses: i64,
    ) -> Result<GenerationOutcome> {
        let generator = self
            .generator
            .as_ref()
            .map_err(|reason| EvalError::generation(reason.to_string()))?;

        let configs = select_configs(num_responses);
        let attempts = run_attempts(&**generator, prompt, configs).await;

        let failed_slots = attempts
            .iter()
            .enumerate()
            .filter(|(_, attempt)| attempt.is_failed())
            .map(|(i, _)| i + 1)
            .collect();
        let responses: Vec<String> = attempts
            .into_iter()
            .map(|attempt| attempt.into_text(prompt))
            .collect();

        let session_id = new_session_id();
        let record = SessionRecord::new(&session_id, prompt, responses.clone(), model_used);
        self.session_store.put(session_id.clone(), record).await;

        tracing::info!(
            "Generated {} responses for user prompt: {}...",
            responses.len(),
            prompt.chars().take(50).collect::<String>()
        );

        Ok(GenerationOutcome {
            session_id,
            prompt: prompt.to_string(),
            responses,
            failed_slots,
        })
    }
}

/// Calls the provider once per configuration, in order.
async fn run_attempts(
    generator: &dyn TextGenerator,
    prompt: &str,
    configs: &[SamplingConfig],
) -> Vec<GenerationAttempt> {
    let mut attempts = Vec::with_capacity(configs.len());
    for (i, config) in configs.iter().enumerate() {
        let slot = i + 1;
        match generator.generate(prompt, config).await {
            Ok(text) => {
                tracing::info!(
                    "Generated response {} with temperature {}",
                    slot,
                    config.temperature
                );
                attempts.push(GenerationAttempt::Generated(text));
            }
            Err(e) => {
                tracing::error!("Error generating response {}: {}", slot, e);
                attempts.push(GenerationAttempt::Failed {
                    slot,
                    reason: e.to_string(),
                });
            }
        }
    }
    attempts
}
