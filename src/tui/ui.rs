use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::analysis::AnalysisResult;
use crate::core::state::{App, ViewState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::headline::HEADLINE_HEIGHT;
use crate::tui::components::score_guide::GUIDE_HEIGHT;
use crate::tui::components::{Headline, PostList, ScoreGuide, TitleBar, TrendChart};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FOOTER: &str = "Enter analyze · ↑/↓ PgUp/PgDn scroll posts · Ctrl+G guide · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, input_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(app.backend.describe(), app.status_message.clone()).render(frame, title_area);

    tui.input_box.busy = app.is_loading();
    tui.input_box.render(frame, input_area);

    match &app.view {
        ViewState::Idle => draw_welcome(frame, main_area),
        ViewState::Loading => draw_loading(frame, main_area, app.topic.trim(), spinner_frame),
        ViewState::Failed(message) => draw_error_view(frame, main_area, message),
        ViewState::Loaded(result) => draw_results(frame, main_area, app, result, tui),
    }

    frame.render_widget(
        Span::styled(FOOTER, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Topic Sentiment Analyzer",
            Style::default().fg(Color::Rgb(0x19, 0x76, 0xd2)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "View the sentiment of a topic from the past week",
            Style::default().fg(Color::Rgb(0xdc, 0x00, 0x4e)),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Type a topic above and press Enter",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

fn draw_loading(frame: &mut Frame, area: Rect, topic: &str, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" Analyzing '{topic}'...")),
    ]);
    let [centered] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), centered);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let [centered] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Start)
        .areas(area);
    frame.render_widget(error_paragraph, centered);
}

fn draw_results(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    result: &AnalysisResult,
    tui: &mut TuiState,
) {
    use Constraint::{Fill, Length};
    let guide_height = if app.show_guide { GUIDE_HEIGHT } else { 0 };
    let [headline_area, guide_area, chart_area, posts_area] =
        Layout::vertical([Length(HEADLINE_HEIGHT), Length(guide_height), Fill(1), Fill(1)])
            .areas(area);

    Headline::new(&result.topic, result.average_sentiment).render(frame, headline_area);

    if app.show_guide {
        ScoreGuide.render(frame, guide_area);
    }

    // Recomputed every frame from the current result
    let points = app.chart_points();
    TrendChart::new(&points).render(frame, chart_area);

    PostList::new(&mut tui.post_list, &result.top_posts).render(frame, posts_area);
}
