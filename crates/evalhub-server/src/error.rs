use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use evalhub_core::EvalError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Chat session not found or expired")]
    SessionNotFound,

    #[error("Database connection failed")]
    Unavailable,

    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        source: EvalError,
    },
}

impl ApiError {
    /// Wraps a failure of one request flow; `context` prefixes the message.
    pub fn internal(context: &'static str, source: EvalError) -> Self {
        ApiError::Internal { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
