//! Request and response bodies of the HTTP API.

use chrono::{DateTime, Utc};
use evalhub_core::config::DEFAULT_MODEL_NAME;
use evalhub_core::evaluation::EvaluationStats;
use serde::{Deserialize, Serialize};

fn default_model_used() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_num_responses() -> i64 {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct MultiResponseRequest {
    pub user_prompt: String,
    #[serde(default = "default_model_used")]
    pub model_used: String,
    /// Not range-checked; values above 3 yield 3 responses.
    #[serde(default = "default_num_responses")]
    pub num_responses: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiResponseResponse {
    pub success: bool,
    pub message: String,
    pub user_prompt: String,
    pub responses: Vec<String>,
    pub chat_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub success: bool,
    pub message: String,
    pub evaluation_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

pub type StatsResponse = EvaluationStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults() {
        let request: MultiResponseRequest =
            serde_json::from_str(r#"{ "user_prompt": "Best laptop under 50k?" }"#).unwrap();
        assert_eq!(request.model_used, "gemini-2.0-flash");
        assert_eq!(request.num_responses, 3);
    }

    #[test]
    fn test_generate_request_requires_prompt() {
        assert!(serde_json::from_str::<MultiResponseRequest>(r#"{ "num_responses": 2 }"#).is_err());
    }
}
