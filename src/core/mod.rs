//! # Core Application Logic
//!
//! This module contains Sentiscope's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • chart / sentiment    │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Headless  │
//!           │  Adapter   │              │  (--topic) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `ViewState` enum
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`chart`]: Trend data → chart points
//! - [`sentiment`]: Headline labels and the score guide
//! - [`config`]: Layered configuration
//! - [`report`]: Plain-text rendering for headless mode

pub mod action;
pub mod chart;
pub mod config;
pub mod report;
pub mod sentiment;
pub mod state;
