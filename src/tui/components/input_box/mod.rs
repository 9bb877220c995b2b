//! # InputBox Component
//!
//! Single-line topic editor.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter
//! - Show a placeholder while empty and keep the cursor in view
//!
//! ## State Management
//!
//! The buffer is internal state; the parent mirrors it into `App::topic`
//! whenever `ContentChanged` is emitted. Submitting does not clear the
//! buffer, so the topic stays on screen next to its results.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{BORDER_OFFSET, CursorState, HORIZONTAL_OVERHEAD, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "e.g., Seattle Seahawks, Crypto, Climate Change";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed
    Submit,
    /// Buffer text changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Renders with a dimmed border while a request is in flight (Prop)
    pub busy: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            busy: false,
            cursor: CursorState::new(),
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.cursor.update_view(&self.buffer, inner_width);

        let border_style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Enter a topic");

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(&self.buffer[self.cursor.view_start..])
                .style(Style::default().fg(Color::Green))
        };
        frame.render_widget(input.block(block), area);

        let cursor_x = area.x + BORDER_OFFSET + self.cursor.column(&self.buffer);
        frame.set_cursor_position((cursor_x, area.y + BORDER_OFFSET));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Topics are single-line
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos)?;
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.buffer, self.cursor.pos)?;
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor.move_left(&self.buffer);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.move_right(&self.buffer);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
