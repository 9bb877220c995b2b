//! # ScoreGuide Component
//!
//! Bordered legend explaining the five sentiment bands. Hidden with Ctrl+G.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::sentiment::{Band, SCORE_GUIDE};
use crate::tui::component::Component;

/// Five guide rows plus top and bottom borders.
pub const GUIDE_HEIGHT: u16 = SCORE_GUIDE.len() as u16 + 2;

pub fn band_color(band: Band) -> Color {
    match band {
        Band::VeryNegative => Color::Rgb(0xd3, 0x2f, 0x2f),
        Band::SomewhatNegative => Color::Rgb(0xf5, 0x7c, 0x00),
        Band::Neutral => Color::Rgb(0x75, 0x75, 0x75),
        Band::SomewhatPositive => Color::Rgb(0x4c, 0xaf, 0x50),
        Band::VeryPositive => Color::Rgb(0x2e, 0x7d, 0x32),
    }
}

pub struct ScoreGuide;

impl Component for ScoreGuide {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = SCORE_GUIDE
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ({}): ", entry.title, entry.range),
                        Style::default()
                            .fg(band_color(entry.band))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.description),
                ])
            })
            .collect();

        let guide = Paragraph::new(lines).block(
            Block::bordered()
                .title("Sentiment Score Guide")
                .border_style(Style::default().add_modifier(Modifier::DIM)),
        );
        frame.render_widget(guide, area);
    }
}
