use async_trait::async_trait;
use evalhub_core::session::{SessionRecord, SessionStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Unbounded in-memory session store.
///
/// Entries are never evicted or expired; the map lives as long as the
/// process. Use [`crate::ExpiringSessionStore`] when memory must be bounded.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session_id: String, record: SessionRecord) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, record);
    }

    async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, prompt: &str) -> SessionRecord {
        SessionRecord::new(id, prompt, vec!["a".into()], "gemini-2.0-flash")
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemorySessionStore::new();
        assert!(store.get("s1").await.is_none());

        store.put("s1".into(), record("s1", "hello")).await;

        let found = store.get("s1").await.expect("Should find session");
        assert_eq!(found.prompt, "hello");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let store = InMemorySessionStore::new();
        store.put("s1".into(), record("s1", "first")).await;
        store.put("s1".into(), record("s1", "second")).await;

        assert_eq!(store.get("s1").await.unwrap().prompt, "second");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_does_not_consume() {
        let store = InMemorySessionStore::new();
        store.put("s1".into(), record("s1", "hello")).await;

        assert!(store.get("s1").await.is_some());
        assert!(store.get("s1").await.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts() {
        let store = InMemorySessionStore::new();
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("s{i}");
                store.put(id.clone(), record(&id, "p")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}
