use std::fmt;

use async_trait::async_trait;

use super::types::{AnalysisResult, HealthStatus};

/// Errors that can occur while talking to the analysis backend.
///
/// Every variant ends up as the same user-facing message; the variant
/// itself only goes to the log.
#[derive(Debug)]
pub enum AnalysisError {
    /// Base URL can't be turned into a request URL.
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Config(msg) => write!(f, "config error: {msg}"),
            AnalysisError::Network(msg) => write!(f, "network error: {msg}"),
            AnalysisError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            AnalysisError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Human-readable location of the backend, shown in the title bar.
    fn describe(&self) -> String;

    /// Requests a sentiment analysis for an already-trimmed topic.
    async fn analyze(&self, topic: &str) -> Result<AnalysisResult, AnalysisError>;

    /// Queries the backend's health endpoint.
    async fn health(&self) -> Result<HealthStatus, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::Api {
            status: 404,
            message: "No posts found for this topic".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 404): No posts found for this topic"
        );
        assert_eq!(
            AnalysisError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            AnalysisError::Parse("expected value".to_string()).to_string(),
            "parse error: expected value"
        );
    }
}
