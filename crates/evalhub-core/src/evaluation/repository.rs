//! Evaluation repository trait.
//!
//! Defines the interface for the durable evaluation store.

use super::model::{EvaluationRecord, Thumbs};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for evaluation documents.
///
/// Decouples the feedback and stats flows from the concrete database
/// (MongoDB in production, an in-memory vector in tests and local runs).
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Persists a record.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The storage-assigned identifier
    /// - `Err(_)`: The write failed
    async fn insert(&self, record: &EvaluationRecord) -> Result<String>;

    /// Counts all stored records.
    async fn count_all(&self) -> Result<u64>;

    /// Counts records carrying the given vote.
    async fn count_by_thumbs(&self, thumbs: Thumbs) -> Result<u64>;

    /// Distinct `user_id` values across all records.
    async fn distinct_user_ids(&self) -> Result<Vec<String>>;

    /// Distinct caller-side `session_id` values across all records.
    async fn distinct_session_ids(&self) -> Result<Vec<String>>;

    /// Liveness probe against the backing store.
    async fn ping(&self) -> Result<()>;
}
