//! MongoDB-backed evaluation repository.
//!
//! Each evaluation is one document in the configured collection. Stats are
//! computed with `count_documents` and `distinct` on demand.

use async_trait::async_trait;
use evalhub_core::config::MongoConfig;
use evalhub_core::evaluation::{EvaluationRecord, EvaluationRepository, Thumbs};
use evalhub_core::{EvalError, Result};
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection};

pub struct MongoEvaluationRepository {
    client: Client,
    collection: Collection<EvaluationRecord>,
}

impl MongoEvaluationRepository {
    /// Connects and pings the server; fails when the server is unreachable.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.url).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            EvalError::data_access(format!("Failed to connect to MongoDB: {e}"))
        })?;

        let database = client.database(&config.database_name);
        let collection = database.collection::<EvaluationRecord>(&config.collection_name);
        let repository = Self {
            client,
            collection,
        };

        repository.ping().await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        tracing::info!(
            "Successfully connected to MongoDB database: {}",
            config.database_name
        );
        tracing::info!("Using collection: {}", config.collection_name);
        Ok(repository)
    }

    /// Closes the underlying client.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }

    async fn distinct_strings(&self, field: &str) -> Result<Vec<String>> {
        let values = self
            .collection
            .distinct(field, Document::new())
            .await
            .map_err(|e| EvalError::data_access(format!("distinct({field}) failed: {e}")))?;

        Ok(values.into_iter().map(bson_to_string).collect())
    }
}

#[async_trait]
impl EvaluationRepository for MongoEvaluationRepository {
    async fn insert(&self, record: &EvaluationRecord) -> Result<String> {
        let result = self.collection.insert_one(record).await.map_err(|e| {
            tracing::error!("Error inserting evaluation: {}", e);
            EvalError::data_access(format!("Failed to insert evaluation: {e}"))
        })?;

        let id = bson_to_string(result.inserted_id);
        tracing::info!("Evaluation inserted with ID: {}", id);
        Ok(id)
    }

    async fn count_all(&self) -> Result<u64> {
        self.collection
            .count_documents(Document::new())
            .await
            .map_err(|e| EvalError::data_access(format!("count_documents failed: {e}")))
    }

    async fn count_by_thumbs(&self, thumbs: Thumbs) -> Result<u64> {
        self.collection
            .count_documents(doc! { "thumbs": thumbs.as_str() })
            .await
            .map_err(|e| EvalError::data_access(format!("count_documents failed: {e}")))
    }

    async fn distinct_user_ids(&self) -> Result<Vec<String>> {
        self.distinct_strings("user_id").await
    }

    async fn distinct_session_ids(&self) -> Result<Vec<String>> {
        self.distinct_strings("session_id").await
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| EvalError::unavailable(format!("MongoDB ping failed: {e}")))
    }
}

fn bson_to_string(value: Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
