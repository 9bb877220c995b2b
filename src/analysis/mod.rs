pub mod backend;
pub mod http;
pub mod types;

pub use backend::{AnalysisBackend, AnalysisError};
pub use http::{DEFAULT_BASE_URL, HttpBackend};
pub use types::{AnalysisResult, HealthStatus, Post, PostId, TrendData};
