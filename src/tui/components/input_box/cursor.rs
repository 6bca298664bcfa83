//! Cursor position tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll
//! offset. All methods take `buffer: &str` explicitly; the text itself is
//! owned by `InputBox`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns taken by the left border.
pub(super) const BORDER_OFFSET: u16 = 1;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column (0 when the text fits)
    pub scroll_offset: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Reset cursor to start (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor, counting wide characters as two.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Scroll just enough to keep the cursor inside `visible_width` columns.
    pub fn update_scroll_offset(&mut self, buffer: &str, visible_width: u16) {
        let visible_width = usize::from(visible_width);
        if visible_width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_offset {
            self.scroll_offset = col;
        } else if col >= self.scroll_offset + visible_width {
            self.scroll_offset = col + 1 - visible_width;
        }
    }

    /// The part of `buffer` that starts at the scroll offset.
    ///
    /// Items have no length limit, so this is sliced here rather than handed
    /// to `Paragraph::scroll`, whose offset is a `u16`.
    pub fn visible_text<'a>(&self, buffer: &'a str) -> &'a str {
        let mut col = 0;
        for (i, c) in buffer.char_indices() {
            if col >= self.scroll_offset {
                return &buffer[i..];
            }
            col += c.width().unwrap_or(0);
        }
        ""
    }

    /// Screen position of the cursor inside a bordered `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let col = self.column(buffer).saturating_sub(self.scroll_offset);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        (
            area.x.saturating_add(BORDER_OFFSET).saturating_add(col),
            area.y.saturating_add(BORDER_OFFSET),
        )
    }
}

/// Byte index of the char boundary before `pos`.
pub(super) fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

/// Byte index of the char boundary after `pos`.
pub(super) fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let s = "a우b";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 4);
        assert_eq!(prev_char_boundary(s, 4), 1);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(next_char_boundary(s, s.len()), s.len());
        assert_eq!(prev_char_boundary(s, 0), 0);
    }

    #[test]
    fn test_column_counts_wide_chars() {
        let mut cursor = CursorState::new();
        cursor.pos = "우유".len();
        assert_eq!(cursor.column("우유 사기"), 4);
    }

    #[test]
    fn test_scroll_follows_cursor_right_then_left() {
        let buffer = "0123456789";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(buffer, 4);
        assert_eq!(cursor.scroll_offset, 7);

        cursor.pos = 2;
        cursor.update_scroll_offset(buffer, 4);
        assert_eq!(cursor.scroll_offset, 2);
    }

    #[test]
    fn test_screen_pos_accounts_for_border_and_scroll() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        cursor.scroll_offset = 1;
        let area = Rect::new(10, 20, 30, 3);
        assert_eq!(cursor.screen_pos("abcdef", area), (13, 21));
    }

    #[test]
    fn test_scroll_past_u16_columns() {
        let buffer = "a".repeat(70_000);
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len();
        cursor.update_scroll_offset(&buffer, 28);
        assert_eq!(cursor.scroll_offset, 70_000 + 1 - 28);
        assert_eq!(cursor.visible_text(&buffer).len(), 27);
        assert_eq!(cursor.screen_pos(&buffer, Rect::new(0, 0, 30, 3)), (28, 1));
    }

    #[test]
    fn test_visible_text_skips_whole_wide_chars() {
        let mut cursor = CursorState::new();
        cursor.scroll_offset = 1;
        assert_eq!(cursor.visible_text("우유"), "유");
        cursor.scroll_offset = 2;
        assert_eq!(cursor.visible_text("우유"), "유");
        cursor.scroll_offset = 10;
        assert_eq!(cursor.visible_text("우유"), "");
    }
}
