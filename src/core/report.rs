//! Plain-text rendering of the current view state, used by headless mode.

use std::fmt::Write;

use crate::core::state::{App, ViewState};

pub fn render(app: &App) -> String {
    let mut out = String::new();

    match &app.view {
        ViewState::Idle => out.push_str("No topic analyzed yet.\n"),
        ViewState::Loading => out.push_str("Analyzing...\n"),
        ViewState::Failed(message) => {
            let _ = writeln!(out, "{message}");
        }
        ViewState::Loaded(result) => {
            let _ = writeln!(out, "Analysis Results for: {}", result.topic);
            if let Some(label) = app.sentiment_label() {
                let _ = writeln!(
                    out,
                    "Average Sentiment: {:.2} ({})",
                    result.average_sentiment,
                    label.label()
                );
            }

            let points = app.chart_points();
            if !points.is_empty() {
                out.push_str("\nDaily sentiment:\n");
                for point in &points {
                    let _ = writeln!(out, "  {:<12} {:>6.2}", point.date, point.sentiment);
                }
            }

            if !result.top_posts.is_empty() {
                out.push_str("\nTop posts:\n");
                for (rank, post) in result.top_posts.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", rank + 1, post.title);
                    let _ = write!(
                        out,
                        "     Score: {} | Sentiment: {:.2}",
                        post.score, post.sentiment_score
                    );
                    if let Some(subreddit) = &post.subreddit {
                        let _ = write!(out, " | r/{subreddit}");
                    }
                    out.push('\n');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ANALYSIS_ERROR_MESSAGE;
    use crate::test_support::{sample_result, test_app};

    #[test]
    fn test_render_loaded() {
        let mut app = test_app();
        let mut result = sample_result();
        result.top_posts[0].subreddit = Some("CryptoCurrency".to_string());
        app.view = ViewState::Loaded(result);

        let text = render(&app);
        assert!(text.contains("Analysis Results for: Crypto"));
        assert!(text.contains("Average Sentiment: 0.72 (Very Positive)"));
        assert!(text.contains("5/1/2024"));
        assert!(text.contains("1. X"));
        assert!(text.contains("Score: 100 | Sentiment: 0.72 | r/CryptoCurrency"));
    }

    #[test]
    fn test_render_failed_shows_only_fixed_message() {
        let mut app = test_app();
        app.view = ViewState::Failed(ANALYSIS_ERROR_MESSAGE.to_string());
        assert_eq!(render(&app), "Error analyzing topic. Please try again.\n");
    }

    #[test]
    fn test_render_idle() {
        assert_eq!(render(&test_app()), "No topic analyzed yet.\n");
    }
}
