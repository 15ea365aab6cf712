use std::sync::Arc;

use async_trait::async_trait;
use axum::{Json, extract::State as AxumState, http::StatusCode, response::IntoResponse};
use evalhub_core::config::{AppConfig, StorageBackend};
use evalhub_core::evaluation::{EvaluationRecord, EvaluationRepository, FeedbackSubmission, Thumbs};
use evalhub_core::generation::{GenerationError, SamplingConfig, TextGenerator};
use evalhub_core::{EvalError, Result};
use evalhub_infrastructure::{InMemoryEvaluationRepository, InMemorySessionStore};
use evalhub_server::dto::MultiResponseRequest;
use evalhub_server::routes::{
    feedback_handler, generate_responses_handler, health_handler, root_handler, stats_handler,
};
use evalhub_server::state::State;

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    fn model_name(&self) -> &str {
        "echo"
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &SamplingConfig,
    ) -> std::result::Result<String, GenerationError> {
        Ok(format!("{prompt} @ {}", config.temperature))
    }
}

struct DownRepository;

#[async_trait]
impl EvaluationRepository for DownRepository {
    async fn insert(&self, _record: &EvaluationRecord) -> Result<String> {
        Err(EvalError::data_access("no primary"))
    }
    async fn count_all(&self) -> Result<u64> {
        Err(EvalError::data_access("no primary"))
    }
    async fn count_by_thumbs(&self, _thumbs: Thumbs) -> Result<u64> {
        Err(EvalError::data_access("no primary"))
    }
    async fn distinct_user_ids(&self) -> Result<Vec<String>> {
        Err(EvalError::data_access("no primary"))
    }
    async fn distinct_session_ids(&self) -> Result<Vec<String>> {
        Err(EvalError::data_access("no primary"))
    }
    async fn ping(&self) -> Result<()> {
        Err(EvalError::unavailable("no primary"))
    }
}

fn state_with(repository: Arc<dyn EvaluationRepository>) -> Arc<State> {
    Arc::new(State::from_parts(
        AppConfig::default(),
        Ok(Arc::new(EchoGenerator)),
        Arc::new(InMemorySessionStore::new()),
        repository,
    ))
}

fn generate_request(prompt: &str, num_responses: i64) -> MultiResponseRequest {
    MultiResponseRequest {
        user_prompt: prompt.to_string(),
        model_used: "gemini-2.0-flash".to_string(),
        num_responses,
    }
}

fn feedback(chat_id: &str, thumbs: Thumbs) -> FeedbackSubmission {
    FeedbackSubmission {
        chat_id: chat_id.to_string(),
        selected_response_index: 0,
        selected_response_text: "first".to_string(),
        thumbs,
        feedback_text: None,
        user_id: "user_123".to_string(),
        session_id: "session_456".to_string(),
    }
}

#[tokio::test]
async fn test_generate_feedback_stats_scenario() {
    let state = state_with(Arc::new(InMemoryEvaluationRepository::new()));

    let Json(generated) = generate_responses_handler(
        AxumState(state.clone()),
        Json(generate_request("Best laptop under 50k?", 2)),
    )
    .await
    .unwrap();
    assert!(generated.success);
    assert_eq!(generated.responses.len(), 2);
    assert_eq!(generated.user_prompt, "Best laptop under 50k?");
    assert_eq!(
        generated.message,
        "Successfully generated 2 responses using Gemini"
    );

    let (status, Json(evaluation)) = feedback_handler(
        AxumState(state.clone()),
        Json(feedback(&generated.chat_id, Thumbs::Up)),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(evaluation.success);
    assert!(evaluation.evaluation_id.is_some());

    let Json(stats) = stats_handler(AxumState(state)).await.unwrap();
    assert!(stats.total_evaluations >= 1);
    assert!(stats.thumbs_up >= 1);
    assert_eq!(stats.positive_rate, 100.0);
}

#[tokio::test]
async fn test_feedback_for_unknown_chat_is_404() {
    let state = state_with(Arc::new(InMemoryEvaluationRepository::new()));

    let err = feedback_handler(AxumState(state), Json(feedback("missing", Thumbs::Down)))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Chat session not found or expired");
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generation_without_provider_is_500() {
    let state = Arc::new(State::from_parts(
        AppConfig::default(),
        Err(GenerationError::Configuration("no key".into())),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(InMemoryEvaluationRepository::new()),
    ));

    let err = generate_responses_handler(AxumState(state), Json(generate_request("p", 3)))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Failed to generate responses"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_storage_down_maps_to_500_and_503() {
    let state = state_with(Arc::new(DownRepository));

    let Json(generated) =
        generate_responses_handler(AxumState(state.clone()), Json(generate_request("p", 1)))
            .await
            .unwrap();

    let err = feedback_handler(
        AxumState(state.clone()),
        Json(feedback(&generated.chat_id, Thumbs::Up)),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().starts_with("Failed to save feedback"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    let err = stats_handler(AxumState(state.clone())).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to fetch statistics"));

    let err = health_handler(AxumState(state)).await.unwrap_err();
    assert_eq!(err.to_string(), "Database connection failed");
    assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_and_root() {
    let state = state_with(Arc::new(InMemoryEvaluationRepository::new()));

    let Json(health) = health_handler(AxumState(state.clone())).await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");

    let Json(root) = root_handler(AxumState(state)).await;
    assert_eq!(root["version"], "1.0.0");
    assert_eq!(
        root["endpoints"]["submit_feedback"],
        "/api/v1/feedback"
    );
}

#[test]
fn test_router_builds() {
    let state = state_with(Arc::new(InMemoryEvaluationRepository::new()));
    let _router = evalhub_server::router(state);
}

#[tokio::test]
async fn test_startup_rejects_zero_session_ttl() {
    let mut config = AppConfig::default();
    config.storage = StorageBackend::Memory;
    config.session_store.ttl_secs = Some(0);

    let err = State::new(config).await.err().expect("startup should fail");
    assert!(err.is_config());
}
