use async_trait::async_trait;
use evalhub_core::Result;
use evalhub_core::evaluation::{EvaluationRecord, EvaluationRepository, Thumbs};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local evaluation store.
///
/// Used for local runs without a database (`storage = "memory"`) and as the
/// default repository in tests. Identifiers are UUID v4 strings.
#[derive(Clone, Default)]
pub struct InMemoryEvaluationRepository {
    records: Arc<RwLock<Vec<(String, EvaluationRecord)>>>,
}

impl InMemoryEvaluationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record with its identifier, in insertion order.
    pub async fn records(&self) -> Vec<(String, EvaluationRecord)> {
        self.records.read().await.clone()
    }

    async fn distinct_by<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&EvaluationRecord) -> &str,
    {
        let records = self.records.read().await;
        records
            .iter()
            .map(|(_, record)| field(record).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn insert(&self, record: &EvaluationRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.records.write().await.push((id.clone(), record.clone()));
        tracing::info!("Evaluation inserted with ID: {}", id);
        Ok(id)
    }

    async fn count_all(&self) -> Result<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn count_by_thumbs(&self, thumbs: Thumbs) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|(_, r)| r.thumbs == thumbs).count() as u64)
    }

    async fn distinct_user_ids(&self) -> Result<Vec<String>> {
        Ok(self.distinct_by(|r| r.user_id.as_str()).await)
    }

    async fn distinct_session_ids(&self) -> Result<Vec<String>> {
        Ok(self.distinct_by(|r| r.session_id.as_str()).await)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
