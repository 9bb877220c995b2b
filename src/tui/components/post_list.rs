//! # PostList Component
//!
//! Scrollable list of the backend's top posts, one bordered card per post:
//! title on top, `Score: N | Sentiment: x.xx` caption underneath.
//!
//! ## Architecture
//!
//! `PostList` is a transient component (created each frame) that wraps
//! `&'a mut PostListState` (persistent scroll state) and the posts (props).
//! Card heights are measured with `Paragraph::line_count` before rendering
//! so the `ScrollView` canvas can be sized up front.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::analysis::Post;
use crate::core::sentiment::SentimentLabel;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::score_guide::band_color;
use crate::tui::event::TuiEvent;

const HEADER: &str = "View the most influential and voted on posts and their sentiment scores:";
/// Borders (2) + horizontal padding (2)
const CARD_HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const CARD_VERTICAL_OVERHEAD: u16 = 2;

/// Scroll state for the post list. Persisted in `TuiState`.
#[derive(Default)]
pub struct PostListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Total card height from the last render
    pub content_height: u16,
}

impl PostListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used when a new result replaces the old one.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for PostListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// A single post card's content, without its border.
fn card_lines(post: &Post) -> Vec<Line<'_>> {
    let label = SentimentLabel::classify(post.sentiment_score);
    let mut caption = vec![
        Span::styled(
            format!("Score: {} | Sentiment: ", post.score),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:.2}", post.sentiment_score),
            Style::default().fg(band_color(label.band())),
        ),
    ];
    if let Some(subreddit) = &post.subreddit {
        caption.push(Span::styled(
            format!(" | r/{subreddit}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    vec![
        Line::from(Span::styled(
            post.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(caption),
    ]
}

/// Rendered height of a card at the given outer width, borders included.
pub fn card_height(post: &Post, width: u16) -> u16 {
    let inner_width = width.saturating_sub(CARD_HORIZONTAL_OVERHEAD);
    if inner_width == 0 {
        return 1;
    }
    let lines = Paragraph::new(card_lines(post))
        .wrap(Wrap { trim: true })
        .line_count(inner_width);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(CARD_VERTICAL_OVERHEAD)
}

pub struct PostList<'a> {
    pub state: &'a mut PostListState,
    pub posts: &'a [Post],
}

impl<'a> PostList<'a> {
    pub fn new(state: &'a mut PostListState, posts: &'a [Post]) -> Self {
        Self { state, posts }
    }
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Line::from(Span::styled(HEADER, Style::default().add_modifier(Modifier::BOLD))),
            header_area,
        );

        if self.posts.is_empty() {
            frame.render_widget(
                Paragraph::new("  No posts returned.").style(Style::default().fg(Color::DarkGray)),
                list_area,
            );
            return;
        }

        let content_width = list_area.width.saturating_sub(1); // -1 for scrollbar
        let heights: Vec<u16> = self
            .posts
            .iter()
            .map(|p| card_height(p, content_width))
            .collect();
        let total_height: u16 = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

        self.state.viewport_height = list_area.height;
        self.state.content_height = total_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (post, &height) in self.posts.iter().zip(heights.iter()) {
            let card = Paragraph::new(card_lines(post))
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_style(Style::default().add_modifier(Modifier::DIM))
                        .padding(Padding::horizontal(1)),
                );
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut self.state.scroll_state);
    }
}
