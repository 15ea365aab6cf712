use std::sync::Arc;

use evalhub_application::{FeedbackService, GenerationService, StatsService};
use evalhub_core::config::{AppConfig, StorageBackend};
use evalhub_core::evaluation::EvaluationRepository;
use evalhub_core::generation::{GenerationError, TextGenerator};
use evalhub_core::session::SessionStore;
use evalhub_infrastructure::{
    ExpiringSessionStore, InMemoryEvaluationRepository, InMemorySessionStore,
    MongoEvaluationRepository,
};
use evalhub_interaction::GeminiApiAgent;
use tracing::{info, warn};

pub struct State {
    pub config: AppConfig,
    pub generation: GenerationService,
    pub feedback: FeedbackService,
    pub stats: StatsService,
    mongo: Option<Arc<MongoEvaluationRepository>>,
}

impl State {
    /// Connects the configured evaluation store and provider.
    ///
    /// Fails when the evaluation store is unreachable. A missing provider key
    /// is not fatal: generation requests then fail individually.
    pub async fn new(config: AppConfig) -> evalhub_core::Result<Arc<Self>> {
        let (repository, mongo) = match config.storage {
            StorageBackend::MongoDb => {
                let mongo = Arc::new(MongoEvaluationRepository::connect(&config.mongodb).await?);
                (mongo.clone() as Arc<dyn EvaluationRepository>, Some(mongo))
            }
            StorageBackend::Memory => {
                warn!("Using in-memory evaluation storage; records are lost on restart");
                (
                    Arc::new(InMemoryEvaluationRepository::new()) as Arc<dyn EvaluationRepository>,
                    None,
                )
            }
        };

        let generator = GeminiApiAgent::from_config(&config.gemini)
            .map(|agent| Arc::new(agent) as Arc<dyn TextGenerator>)
            .inspect_err(|e| warn!("Text generation disabled: {e}"));

        let session_store = session_store_for(&config)?;

        let mut state = Self::from_parts(config, generator, session_store, repository);
        state.mongo = mongo;
        Ok(Arc::new(state))
    }

    pub fn from_parts(
        config: AppConfig,
        generator: Result<Arc<dyn TextGenerator>, GenerationError>,
        session_store: Arc<dyn SessionStore>,
        repository: Arc<dyn EvaluationRepository>,
    ) -> Self {
        let generation = match generator {
            Ok(generator) => GenerationService::new(generator, session_store.clone()),
            Err(reason) => GenerationService::without_generator(reason, session_store.clone()),
        };

        Self {
            config,
            generation,
            feedback: FeedbackService::new(session_store, repository.clone()),
            stats: StatsService::new(repository),
            mongo: None,
        }
    }

    pub async fn close(&self) {
        if let Some(mongo) = &self.mongo {
            mongo.close().await;
        }
    }
}

fn session_store_for(config: &AppConfig) -> evalhub_core::Result<Arc<dyn SessionStore>> {
    if config.session_store.is_bounded() {
        info!(
            "Session store bounded: max_entries={:?}, ttl_secs={:?}",
            config.session_store.max_entries, config.session_store.ttl_secs
        );
        Ok(Arc::new(ExpiringSessionStore::from_config(
            &config.session_store,
        )?))
    } else {
        Ok(Arc::new(InMemorySessionStore::new()))
    }
}
