//! Cursor position tracking and horizontal scrolling for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the first visible byte.
//! All methods accept `buffer: &str` explicitly; the text itself is
//! owned by `InputBox`.

use unicode_width::UnicodeWidthStr;

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Left + right borders
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Byte offset of the first visible character
    pub view_start: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, view_start: 0 }
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        match prev_char_boundary(buffer, self.pos) {
            Some(prev) => {
                self.pos = prev;
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        match next_char_boundary(buffer, self.pos) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }

    /// Shift the visible window so the cursor stays inside `inner_width` columns.
    pub fn update_view(&mut self, buffer: &str, inner_width: u16) {
        if self.view_start > self.pos {
            self.view_start = self.pos;
        }
        // Edits before the window can leave it pointing into a character
        if !buffer.is_char_boundary(self.view_start) {
            self.view_start = 0;
        }

        // Keep one column free for the cursor cell itself
        let max_col = usize::from(inner_width.saturating_sub(1));
        while buffer[self.view_start..self.pos].width() > max_col {
            match buffer[self.view_start..].chars().next() {
                Some(c) => self.view_start += c.len_utf8(),
                None => break,
            }
        }
    }

    /// Column of the cursor relative to the start of the visible window.
    pub fn column(&self, buffer: &str) -> u16 {
        let width = buffer[self.view_start..self.pos].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

/// Byte offset of the character before `pos`, if any.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].chars().next_back().map(|c| pos - c.len_utf8())
}

/// Byte offset just past the character at `pos`, if any.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}
