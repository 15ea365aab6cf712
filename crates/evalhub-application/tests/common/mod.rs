#![allow(dead_code)]

use async_trait::async_trait;
use evalhub_core::evaluation::{EvaluationRecord, EvaluationRepository, Thumbs};
use evalhub_core::generation::{GenerationError, SamplingConfig, TextGenerator};
use evalhub_core::{EvalError, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// Generator that echoes its inputs and fails on chosen 1-based call numbers.
pub struct ScriptedGenerator {
    failing_calls: HashSet<usize>,
    calls: Mutex<Vec<SamplingConfig>>,
}

impl ScriptedGenerator {
    pub fn succeeding() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            failing_calls: calls.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SamplingConfig> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &SamplingConfig,
    ) -> std::result::Result<String, GenerationError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(*config);
            calls.len()
        };
        if self.failing_calls.contains(&call) {
            return Err(GenerationError::Api {
                status: 503,
                message: "UNAVAILABLE: overloaded".into(),
                retryable: true,
            });
        }
        Ok(format!("[t={}] answer to {}", config.temperature, prompt))
    }
}

/// Repository whose every operation fails.
pub struct BrokenRepository;

#[async_trait]
impl EvaluationRepository for BrokenRepository {
    async fn insert(&self, _record: &EvaluationRecord) -> Result<String> {
        Err(EvalError::data_access("write refused"))
    }

    async fn count_all(&self) -> Result<u64> {
        Err(EvalError::data_access("read refused"))
    }

    async fn count_by_thumbs(&self, _thumbs: Thumbs) -> Result<u64> {
        Err(EvalError::data_access("read refused"))
    }

    async fn distinct_user_ids(&self) -> Result<Vec<String>> {
        Err(EvalError::data_access("read refused"))
    }

    async fn distinct_session_ids(&self) -> Result<Vec<String>> {
        Err(EvalError::data_access("read refused"))
    }

    async fn ping(&self) -> Result<()> {
        Err(EvalError::data_access("connection reset"))
    }
}
