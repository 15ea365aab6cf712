//! Session store trait.
//!
//! Defines the interface for holding session records between the
//! generate and feedback requests.

use super::model::SessionRecord;
use async_trait::async_trait;

/// A concurrent key-value store of [`SessionRecord`]s keyed by session ID.
///
/// There is intentionally no `delete`: a session stays readable after
/// feedback has been recorded against it, so a second vote on the same
/// session is accepted. The default implementation is unbounded and never
/// expires entries; bounded implementations may report evicted or expired
/// sessions as missing.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts a record, overwriting any record under the same ID.
    async fn put(&self, session_id: String, record: SessionRecord);

    /// Looks up a record by its ID. Has no side effects.
    ///
    /// # Returns
    ///
    /// - `Some(SessionRecord)`: Session found
    /// - `None`: Session unknown (or expired, for bounded stores)
    async fn get(&self, session_id: &str) -> Option<SessionRecord>;

    /// Number of records currently held.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
