//! # Application State
//!
//! Core business state for Sentiscope. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn AnalysisBackend>  // where requests go
//! ├── topic: String                      // input text, trimmed at submit
//! ├── view: ViewState                    // Idle | Loading | Loaded | Failed
//! ├── status_message: String             // title bar text
//! ├── date_format: String                // chart date labels
//! ├── show_guide: bool                   // score guide visibility
//! └── next_request_id: u64               // request counter for log correlation
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::analysis::{AnalysisBackend, AnalysisResult};
use crate::core::chart::{ChartPoint, chart_points};
use crate::core::config::ResolvedConfig;
use crate::core::sentiment::SentimentLabel;

/// The only message a failed analysis ever shows.
pub const ANALYSIS_ERROR_MESSAGE: &str = "Error analyzing topic. Please try again.";

/// Exactly one of these is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(AnalysisResult),
    Failed(String),
}

pub struct App {
    pub backend: Arc<dyn AnalysisBackend>,
    pub topic: String,
    pub view: ViewState,
    pub status_message: String,
    pub date_format: String,
    pub show_guide: bool,
    pub next_request_id: u64,
}

impl App {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self::from_config(backend, &ResolvedConfig::default())
    }

    pub fn from_config(backend: Arc<dyn AnalysisBackend>, config: &ResolvedConfig) -> Self {
        Self {
            backend,
            topic: String::new(),
            view: ViewState::Idle,
            status_message: String::from("Enter a topic and press Enter"),
            date_format: config.date_format.clone(),
            show_guide: config.show_guide,
            next_request_id: 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.view {
            ViewState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.view {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Chart points for the current result, derived fresh on each call.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart_points(self.result(), &self.date_format)
    }

    pub fn sentiment_label(&self) -> Option<SentimentLabel> {
        self.result()
            .map(|r| SentimentLabel::classify(r.average_sentiment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_result, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.view, ViewState::Idle);
        assert!(app.topic.is_empty());
        assert!(!app.is_loading());
        assert!(app.show_guide);
        assert!(app.result().is_none());
        assert!(app.error().is_none());
        assert!(app.chart_points().is_empty());
        assert!(app.sentiment_label().is_none());
    }

    #[test]
    fn test_derived_views_follow_loaded_result() {
        let mut app = test_app();
        app.view = ViewState::Loaded(sample_result());

        assert_eq!(app.chart_points().len(), 1);
        assert_eq!(app.chart_points()[0].date, "5/1/2024");
        assert_eq!(app.sentiment_label(), Some(SentimentLabel::VeryPositive));
    }

    #[test]
    fn test_failed_exposes_error_only() {
        let mut app = test_app();
        app.view = ViewState::Failed(ANALYSIS_ERROR_MESSAGE.to_string());
        assert_eq!(app.error(), Some(ANALYSIS_ERROR_MESSAGE));
        assert!(app.result().is_none());
        assert!(app.chart_points().is_empty());
    }
}
