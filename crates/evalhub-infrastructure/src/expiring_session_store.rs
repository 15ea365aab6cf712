use async_trait::async_trait;
use evalhub_core::config::SessionStoreConfig;
use evalhub_core::session::{SessionRecord, SessionStore};
use evalhub_core::{EvalError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct Entry {
    inserted_at: Instant,
    record: SessionRecord,
}

/// Session store with an optional capacity bound and time-to-live.
///
/// Expired entries read as missing and are purged on the next insert. When
/// the store is full, the oldest entry is evicted to make room.
#[derive(Clone)]
pub struct ExpiringSessionStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    max_entries: Option<usize>,
    ttl: Option<Duration>,
}

impl ExpiringSessionStore {
    pub fn new(max_entries: Option<usize>, ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_entries,
            ttl,
        }
    }

    /// Builds the store from `[session_store]`.
    ///
    /// A zero TTL is rejected: every session would expire on insert.
    pub fn from_config(config: &SessionStoreConfig) -> Result<Self> {
        if config.ttl_secs == Some(0) {
            return Err(EvalError::config(
                "session_store.ttl_secs must be greater than zero",
            ));
        }
        Ok(Self::new(
            config.max_entries,
            config.ttl_secs.map(Duration::from_secs),
        ))
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.duration_since(entry.inserted_at) >= ttl)
    }
}

#[async_trait]
impl SessionStore for ExpiringSessionStore {
    async fn put(&self, session_id: String, record: SessionRecord) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if self.ttl.is_some() {
            entries.retain(|_, entry| !self.is_expired(entry, now));
        }

        if let Some(max) = self.max_entries {
            while !entries.contains_key(&session_id) && entries.len() >= max.max(1) {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(id, _)| id.clone());
                match oldest {
                    Some(id) => {
                        tracing::debug!("Evicting session {} (store full)", id);
                        entries.remove(&id);
                    }
                    None => break,
                }
            }
        }

        entries.insert(
            session_id,
            Entry {
                inserted_at: now,
                record,
            },
        );
    }

    async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        let entries = self.entries.read().await;
        entries
            .get(session_id)
            .filter(|entry| !self.is_expired(entry, Instant::now()))
            .map(|entry| entry.record.clone())
    }

    async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries
            .values()
            .filter(|entry| !self.is_expired(entry, now))
            .count()
    }
}
