use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a source post. Backends send either a number or a string id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A source post that contributed to the analysis.
///
/// `subreddit`, `url` and `created_utc` are optional extras; the client
/// shows them when the backend includes them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub score: i64,
    pub sentiment_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_utc: Option<f64>,
}

/// Parallel, index-aligned daily sentiment arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TrendData {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub sentiments: Vec<f64>,
}

/// The body of a successful `GET /analyze/{topic}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub topic: String,
    pub average_sentiment: f64,
    #[serde(default)]
    pub trend_data: Option<TrendData>,
    #[serde(default)]
    pub top_posts: Vec<Post>,
}

/// The body of `GET /health`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let body = r#"{
            "topic": "Crypto",
            "average_sentiment": 0.72,
            "trend_data": {
                "dates": ["2024-05-01"],
                "sentiments": [0.72],
                "average_sentiment": 0.72
            },
            "top_posts": [{"id": 1, "title": "X", "score": 100, "sentiment_score": 0.72}]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.topic, "Crypto");
        assert_eq!(result.average_sentiment, 0.72);
        let trend = result.trend_data.unwrap();
        assert_eq!(trend.dates, vec!["2024-05-01"]);
        assert_eq!(trend.sentiments, vec![0.72]);
        assert_eq!(result.top_posts.len(), 1);
        assert_eq!(result.top_posts[0].id, PostId::Number(1));
        assert_eq!(result.top_posts[0].subreddit, None);
    }

    #[test]
    fn test_missing_trend_data_and_posts_default() {
        let body = r#"{"topic": "t", "average_sentiment": 0.0}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.trend_data.is_none());
        assert!(result.top_posts.is_empty());
    }

    #[test]
    fn test_string_post_id_and_extras() {
        let body = r#"{
            "id": "1cx9ab", "title": "Launch day", "score": 42,
            "sentiment_score": -0.3, "subreddit": "rust",
            "url": "https://example.com/p", "created_utc": 1714521600.0
        }"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post.id, PostId::Text("1cx9ab".to_string()));
        assert_eq!(post.id.to_string(), "1cx9ab");
        assert_eq!(post.subreddit.as_deref(), Some("rust"));
        assert_eq!(post.created_utc, Some(1714521600.0));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let body = r#"{"topic": "t"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn test_health_status() {
        let healthy: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(healthy.is_healthy());
        let degraded = HealthStatus { status: "degraded".to_string() };
        assert!(!degraded.is_healthy());
    }
}
