//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::analysis::{
    AnalysisBackend, AnalysisError, AnalysisResult, HealthStatus, Post, PostId, TrendData,
};

/// A backend that answers every request with the same scripted outcome
/// and records which topics were asked for.
pub struct ScriptedBackend {
    outcome: Mutex<Option<AnalysisError>>,
    result: Option<AnalysisResult>,
    topics: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn succeeding(result: AnalysisResult) -> Self {
        Self {
            outcome: Mutex::new(None),
            result: Some(result),
            topics: Mutex::new(Vec::new()),
        }
    }

    /// Fails the first request with `error`; later requests get a network error.
    pub fn failing(error: AnalysisError) -> Self {
        Self {
            outcome: Mutex::new(Some(error)),
            result: None,
            topics: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_topics(&self) -> Vec<String> {
        self.topics.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn analyze(&self, topic: &str) -> Result<AnalysisResult, AnalysisError> {
        self.topics.lock().unwrap().push(topic.to_string());
        match &self.result {
            Some(result) => Ok(result.clone()),
            None => Err(self
                .outcome
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| AnalysisError::Network("scripted failure".to_string()))),
        }
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        Ok(HealthStatus { status: "healthy".to_string() })
    }
}

/// The "Crypto" payload used throughout the tests.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        topic: "Crypto".to_string(),
        average_sentiment: 0.72,
        trend_data: Some(TrendData {
            dates: vec!["2024-05-01".to_string()],
            sentiments: vec![0.72],
        }),
        top_posts: vec![Post {
            id: PostId::Number(1),
            title: "X".to_string(),
            score: 100,
            sentiment_score: 0.72,
            subreddit: None,
            url: None,
            created_utc: None,
        }],
    }
}

/// Creates a test App backed by a backend that never gets called.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(ScriptedBackend::succeeding(sample_result())))
}
