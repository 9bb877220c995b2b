//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events, terminal
//!   resize, or a completed request.
//!
//! ## Requests
//!
//! `update()` answers a valid submit with `Effect::SpawnRequest`. The loop
//! runs the request on a tokio task, which sends the completing `Action`
//! back over a std mpsc channel. Nothing is cancelled; if two requests
//! overlap, whichever finishes last is what ends up on screen.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::analysis::{AnalysisBackend, HttpBackend};
use crate::core::action::{Action, AnalysisRequest, Effect, execute_request, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, PostListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub post_list: PostListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            post_list: PostListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the analysis backend from a resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Arc<dyn AnalysisBackend> {
    Arc::new(HttpBackend::new(config.base_url.clone()))
}

/// Routes one terminal event. Returns `true` when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => false,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit) == Effect::Quit,
        TuiEvent::ToggleGuide => {
            update(app, Action::ToggleGuide);
            false
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.post_list.handle_event(&event);
            false
        }
        _ => {
            match tui.input_box.handle_event(&event) {
                Some(InputEvent::ContentChanged) => {
                    update(app, Action::SetTopic(tui.input_box.buffer.clone()));
                }
                Some(InputEvent::Submit) => {
                    if let Effect::SpawnRequest(request) = update(app, Action::Submit) {
                        spawn_request(app, request, tx.clone());
                    }
                }
                None => {}
            }
            false
        }
    }
}

/// Applies a completed request. New results start scrolled to the top.
fn apply_completion(app: &mut App, tui: &mut TuiState, action: Action) {
    if matches!(action, Action::AnalysisSucceeded { .. }) {
        tui.post_list.reset();
    }
    update(app, action);
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config);
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle completed requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply_completion(&mut app, &mut tui, action);
        }
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    Ok(())
}

fn spawn_request(app: &App, request: AnalysisRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning analysis request #{} ({:?})", request.id, request.topic);
    let backend = app.backend.clone();

    tokio::spawn(async move {
        let request_id = request.id;
        let action = execute_request(backend.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver result of request #{}: receiver dropped", request_id);
        }
    });
}
