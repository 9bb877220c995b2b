//! # Actions
//!
//! Everything that can happen in Sentiscope becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend responds? That's `Action::AnalysisSucceeded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the event loop to carry out.
//! No I/O happens in here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## State machine
//!
//! ```text
//! Idle ──Submit(valid)──▶ Loading ──Succeeded──▶ Loaded
//!   ▲                        │  ▲                   │
//!   └─Submit(blank): no-op   │  └──Submit(valid)────┤
//!                            └──Failed──▶ Failed ───┘
//! ```
//!
//! Completions are applied as they arrive. If two requests overlap, the
//! one that finishes last decides what is on screen.

use log::{debug, info, warn};

use crate::analysis::{AnalysisBackend, AnalysisResult};
use crate::core::state::{ANALYSIS_ERROR_MESSAGE, App, ViewState};

/// A request the event loop should send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub id: u64,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Input text changed.
    SetTopic(String),
    /// Analyze the current topic.
    Submit,
    AnalysisSucceeded {
        request_id: u64,
        result: AnalysisResult,
    },
    AnalysisFailed {
        request_id: u64,
        cause: String,
    },
    ToggleGuide,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnRequest(AnalysisRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetTopic(topic) => {
            app.topic = topic;
            Effect::None
        }
        Action::Submit => {
            let topic = app.topic.trim();
            if topic.is_empty() {
                debug!("Submit ignored: blank topic");
                return Effect::None;
            }

            let request = AnalysisRequest {
                id: app.next_request_id,
                topic: topic.to_string(),
            };
            app.next_request_id += 1;

            info!("Submitting request #{} for topic {:?}", request.id, request.topic);
            app.view = ViewState::Loading;
            app.status_message = format!("Analyzing '{}'...", request.topic);
            Effect::SpawnRequest(request)
        }
        Action::AnalysisSucceeded { request_id, result } => {
            info!(
                "Request #{} succeeded: {} trend points, {} posts",
                request_id,
                result.trend_data.as_ref().map_or(0, |t| t.dates.len()),
                result.top_posts.len()
            );
            app.status_message = format!(
                "Loaded '{}' ({} posts)",
                result.topic,
                result.top_posts.len()
            );
            app.view = ViewState::Loaded(result);
            Effect::None
        }
        Action::AnalysisFailed { request_id, cause } => {
            warn!("Request #{} failed: {}", request_id, cause);
            app.status_message = String::from("Analysis failed");
            app.view = ViewState::Failed(ANALYSIS_ERROR_MESSAGE.to_string());
            Effect::None
        }
        Action::ToggleGuide => {
            app.show_guide = !app.show_guide;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Runs one request against the backend and returns the action that
/// completes it.
pub async fn execute_request(backend: &dyn AnalysisBackend, request: AnalysisRequest) -> Action {
    match backend.analyze(&request.topic).await {
        Ok(result) => Action::AnalysisSucceeded {
            request_id: request.id,
            result,
        },
        Err(e) => Action::AnalysisFailed {
            request_id: request.id,
            cause: e.to_string(),
        },
    }
}
