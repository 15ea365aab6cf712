use std::sync::Arc;

use axum::{Json, extract::State as AxumState, http::StatusCode};
use chrono::Utc;
use evalhub_core::evaluation::FeedbackSubmission;
use serde_json::{Value, json};
use tracing::error;

use crate::{
    dto::{
        EvaluationResponse, HealthResponse, MultiResponseRequest, MultiResponseResponse,
        StatsResponse,
    },
    error::ApiError,
    state::State,
};

pub async fn root_handler(AxumState(state): AxumState<Arc<State>>) -> Json<Value> {
    Json(json!({
        "message": "Welcome to LLM Evaluation API",
        "version": state.config.app_version,
        "endpoints": {
            "generate_responses": "/api/v1/generate-responses",
            "submit_feedback": "/api/v1/feedback",
            "health": "/health",
            "stats": "/api/v1/stats",
        }
    }))
}

pub async fn health_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state
        .stats
        .health()
        .await
        .map_err(|_| ApiError::Unavailable)?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}

pub async fn generate_responses_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(request): Json<MultiResponseRequest>,
) -> Result<Json<MultiResponseResponse>, ApiError> {
    let outcome = state
        .generation
        .generate(&request.user_prompt, &request.model_used, request.num_responses)
        .await
        .map_err(|e| {
            error!("Error in generate_responses: {e}");
            ApiError::internal("Failed to generate responses", e)
        })?;

    Ok(Json(MultiResponseResponse {
        success: true,
        message: format!(
            "Successfully generated {} responses using Gemini",
            outcome.responses.len()
        ),
        user_prompt: outcome.prompt,
        responses: outcome.responses,
        chat_id: outcome.session_id,
        timestamp: Utc::now(),
    }))
}

pub async fn feedback_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(feedback): Json<FeedbackSubmission>,
) -> Result<(StatusCode, Json<EvaluationResponse>), ApiError> {
    let evaluation_id = state.feedback.submit(feedback).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::SessionNotFound
        } else {
            error!("Error saving feedback: {e}");
            ApiError::internal("Failed to save feedback", e)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(EvaluationResponse {
            success: true,
            message: "Feedback submitted successfully".to_string(),
            evaluation_id: Some(evaluation_id),
            timestamp: Utc::now(),
        }),
    ))
}

pub async fn stats_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.stats.stats().await.map_err(|e| {
        error!("Error fetching stats: {e}");
        ApiError::internal("Failed to fetch statistics", e)
    })?;

    Ok(Json(stats))
}
