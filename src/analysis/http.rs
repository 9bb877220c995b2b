//! HTTP implementation of the analysis backend.
//!
//! The backend contract is two plain GETs:
//! - `{base_url}/analyze/{topic}` → `AnalysisResult` JSON
//! - `{base_url}/health` → `{"status": "healthy"}`
//!
//! No auth, no request body, no query string. No timeout is set, so a
//! request runs until reqwest's own defaults give up.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::analysis::types::ErrorBody;
use crate::analysis::{AnalysisBackend, AnalysisError, AnalysisResult, HealthStatus};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Analysis backend reached over HTTP.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    ///
    /// A topic like `"AC/DC live"` stays a single path segment
    /// (`AC%2FDC%20live`). A trailing `/` on the base URL is tolerated.
    ///
    /// `.` and `..` are rejected: URL parsing resolves them (even
    /// percent-encoded) instead of sending them, so the request would
    /// reach a different endpoint.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, AnalysisError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(AnalysisError::Config(format!(
                "path segment '{dots}' cannot be sent in a URL"
            )));
        }
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AnalysisError::Config(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                AnalysisError::Config(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AnalysisError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Backend response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // FastAPI wraps errors as {"detail": "..."}; fall back to the raw body
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.detail)
                .unwrap_or(body);
            warn!("Backend error: {} - {}", status.as_u16(), message);
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                AnalysisError::Parse(e.to_string())
            } else {
                AnalysisError::Network(e.to_string())
            }
        })
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn analyze(&self, topic: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = self.endpoint_url(&["analyze", topic])?;
        info!("Analysis request: GET {}", url);

        let result: AnalysisResult = self.get_json(url).await?;
        info!(
            "Analysis received: topic={:?}, average={:.3}, posts={}",
            result.topic,
            result.average_sentiment,
            result.top_posts.len()
        );
        Ok(result)
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = self.endpoint_url(&["health"])?;
        info!("Health check: GET {}", url);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_default_base() {
        let backend = HttpBackend::new(DEFAULT_BASE_URL);
        let url = backend.endpoint_url(&["analyze", "Crypto"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/analyze/Crypto");
    }

    #[test]
    fn test_endpoint_url_percent_encodes_topic() {
        let backend = HttpBackend::new(DEFAULT_BASE_URL);
        let url = backend
            .endpoint_url(&["analyze", "Seattle Seahawks"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/analyze/Seattle%20Seahawks"
        );

        let url = backend.endpoint_url(&["analyze", "AC/DC?#"]).unwrap();
        assert_eq!(url.path(), "/api/analyze/AC%2FDC%3F%23");
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let backend = HttpBackend::new("http://example.com:9000/api/");
        let url = backend.endpoint_url(&["health"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com:9000/api/health");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage_base() {
        let backend = HttpBackend::new("not a url");
        assert!(matches!(
            backend.endpoint_url(&["health"]),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_endpoint_url_rejects_dot_segments() {
        let backend = HttpBackend::new(DEFAULT_BASE_URL);
        for topic in [".", ".."] {
            assert!(matches!(
                backend.endpoint_url(&["analyze", topic]),
                Err(AnalysisError::Config(_))
            ));
        }
        // Dots inside a longer topic are ordinary characters
        let url = backend.endpoint_url(&["analyze", "...and more"]).unwrap();
        assert_eq!(url.path(), "/api/analyze/...and%20more");
    }

    #[test]
    fn test_describe_is_base_url() {
        let backend = HttpBackend::new("http://10.0.0.5:8000/api");
        assert_eq!(backend.describe(), "http://10.0.0.5:8000/api");
        assert_eq!(backend.base_url(), "http://10.0.0.5:8000/api");
    }
}
