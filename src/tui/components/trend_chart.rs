//! # TrendChart Component
//!
//! Line plot of daily sentiment using ratatui's `Chart` widget.
//!
//! The x axis is the point index (dates are categorical labels, already
//! ordered by the backend); the y axis is fixed to the score range
//! `[-1, 1]` so charts for different topics are comparable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph};

use crate::core::chart::{ChartPoint, plot_data};
use crate::tui::component::Component;

pub struct TrendChart<'a> {
    pub points: &'a [ChartPoint],
}

impl<'a> TrendChart<'a> {
    pub fn new(points: &'a [ChartPoint]) -> Self {
        Self { points }
    }

    /// First, middle and last date labels (deduplicated for short series).
    /// A lone point sits mid-axis, so its label gets blank neighbours.
    fn x_labels(&self) -> Vec<String> {
        let n = self.points.len();
        if n == 1 {
            return vec![String::new(), self.points[0].date.clone(), String::new()];
        }
        let mut indices = vec![0, n / 2, n.saturating_sub(1)];
        indices.dedup();
        indices
            .into_iter()
            .filter_map(|i| self.points.get(i).map(|p| p.date.clone()))
            .collect()
    }

    /// x range: `[0, n-1]`, or `[-1, 1]` around a lone point.
    fn x_bounds(&self) -> [f64; 2] {
        match self.points.len() {
            0 | 1 => [-1.0, 1.0],
            n => [0.0, (n - 1) as f64],
        }
    }
}

impl Component for TrendChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Sentiment Trend");

        if self.points.is_empty() {
            let empty = Paragraph::new(Line::from("  No trend data.")).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let data = plot_data(self.points);

        // A single point has no segment to draw, so plot it as a dot
        let graph_type = if data.len() > 1 {
            GraphType::Line
        } else {
            GraphType::Scatter
        };

        let dataset = Dataset::default()
            .name("sentiment")
            .marker(symbols::Marker::Braille)
            .graph_type(graph_type)
            .style(Style::default().fg(Color::Rgb(0x19, 0x76, 0xd2)))
            .data(&data);

        let x_axis = Axis::default()
            .title("Date".dark_gray())
            .bounds(self.x_bounds())
            .labels(self.x_labels());

        let y_axis = Axis::default()
            .title("Sentiment".dark_gray())
            .bounds([-1.0, 1.0])
            .labels(["-1.0", "0.0", "1.0"]);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}
