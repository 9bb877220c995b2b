//! # Headline Component
//!
//! Two lines at the top of the results: the analyzed topic, and the average
//! sentiment with its label, coloured by guide band.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::sentiment::SentimentLabel;
use crate::tui::component::Component;
use crate::tui::components::score_guide::band_color;

pub const HEADLINE_HEIGHT: u16 = 2;

pub struct Headline<'a> {
    pub topic: &'a str,
    pub average_sentiment: f64,
}

impl<'a> Headline<'a> {
    pub fn new(topic: &'a str, average_sentiment: f64) -> Self {
        Self {
            topic,
            average_sentiment,
        }
    }
}

impl Component for Headline<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = SentimentLabel::classify(self.average_sentiment);

        let lines = vec![
            Line::from(vec![
                Span::raw("Analysis Results for: "),
                Span::styled(self.topic, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::raw(format!("Average Sentiment: {:.2} ", self.average_sentiment)),
                Span::styled(
                    format!("({})", label.label()),
                    Style::default()
                        .fg(band_color(label.band()))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_headline_text() {
        let backend = TestBackend::new(60, HEADLINE_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Headline::new("Crypto", 0.7249).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Analysis Results for: Crypto"));
        assert!(text.contains("Average Sentiment: 0.72 (Very Positive)"));
    }

    #[test]
    fn test_headline_zero_reads_somewhat_negative() {
        let backend = TestBackend::new(60, HEADLINE_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Headline::new("Meh", 0.0).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("0.00 (Somewhat Negative)"));
    }
}
