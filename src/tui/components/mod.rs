//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters and are built
//! fresh each frame:
//! - `TitleBar`: Top status bar with backend and status
//! - `Headline`: Topic and average sentiment with its label
//! - `ScoreGuide`: The five-band sentiment legend
//! - `TrendChart`: Daily sentiment line chart
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep state across frames and react to `TuiEvent`s:
//! - `InputBox`: Single-line topic editor
//! - `PostList`: Scrollable top-post cards (state in `PostListState`)
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. This keeps dependencies explicit and lets each
//! component be rendered into a `TestBackend` on its own.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! Headline::new(&result.topic, result.average_sentiment).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── input_box/       (Topic editor + cursor tracking)
//! ├── headline.rs      (Average sentiment headline)
//! ├── score_guide.rs   (Band legend + band colours)
//! ├── trend_chart.rs   (Line chart)
//! └── post_list.rs     (Scrollable post cards)
//! ```

pub mod headline;
pub mod input_box;
pub mod post_list;
pub mod score_guide;
mod title_bar;
pub mod trend_chart;

pub use headline::Headline;
pub use input_box::{InputBox, InputEvent};
pub use post_list::{PostList, PostListState};
pub use score_guide::ScoreGuide;
pub use title_bar::TitleBar;
pub use trend_chart::TrendChart;
