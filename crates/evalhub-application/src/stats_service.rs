use evalhub_core::Result;
use evalhub_core::evaluation::{EvaluationRepository, EvaluationStats, Thumbs, positive_rate};
use std::sync::Arc;

/// Read-side aggregates and liveness over the evaluation store.
pub struct StatsService {
    repository: Arc<dyn EvaluationRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self { repository }
    }

    /// Computes counts and rates directly from the store.
    pub async fn stats(&self) -> Result<EvaluationStats> {
        let (total_evaluations, thumbs_up, thumbs_down, users, sessions) = futures::try_join!(
            self.repository.count_all(),
            self.repository.count_by_thumbs(Thumbs::Up),
            self.repository.count_by_thumbs(Thumbs::Down),
            self.repository.distinct_user_ids(),
            self.repository.distinct_session_ids(),
        )?;

        Ok(EvaluationStats {
            total_evaluations,
            thumbs_up,
            thumbs_down,
            positive_rate: positive_rate(thumbs_up, total_evaluations),
            unique_users: users.len(),
            unique_sessions: sessions.len(),
        })
    }

    /// Probes the store. Any failure is reported as unavailable.
    pub async fn health(&self) -> Result<()> {
        self.repository.ping().await.map_err(|e| {
            tracing::error!("Health check failed: {}", e);
            if e.is_unavailable() {
                e
            } else {
                evalhub_core::EvalError::unavailable(e.to_string())
            }
        })
    }
}
