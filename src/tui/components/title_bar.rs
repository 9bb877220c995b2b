//! # TitleBar Component
//!
//! Top status bar: app name, backend location, and the current status
//! message ("Analyzing 'Crypto'...", "Analysis failed", ...).
//!
//! Stateless. All three props come from `App`; the title bar just renders
//! what it's given.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Sentiscope (backend: http://...) | Analyzing 'Crypto'..."`
//! 2. **Default**: `"Sentiscope (backend: http://...)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Backend base URL
    pub backend: String,
    /// Status message
    pub status_message: String,
}

impl TitleBar {
    pub fn new(backend: String, status_message: String) -> Self {
        Self {
            backend,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Sentiscope (backend: {})", self.backend)
        } else {
            format!(
                "Sentiscope (backend: {}) | {}",
                self.backend, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
