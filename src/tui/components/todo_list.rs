//! # TodoList Component
//!
//! Renders every item as a numbered row with a `[x]` delete control at the
//! right edge of its first line:
//!
//! ```text
//! ┌ To-do ───────────────────────────┐
//! │1. Buy milk                    [x]│
//! │2. Call Bob about the very long   │
//! │   thing that wraps            [x]│  ← control stays on the first line
//! └──────────────────────────────────┘
//! ```
//!
//! Rows carry no ids. A click is mapped back to a position by walking the
//! row heights cached during the last render, starting at the list's scroll
//! offset, so the position always matches what is on screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TodoListState` lives in `TuiState`
//! - `TodoList` is created each frame with borrowed items and state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// The per-row delete affordance.
pub const DELETE_CONTROL: &str = "[x]";

/// Columns between the row text and the delete control.
const CONTROL_GAP: u16 = 1;

const EMPTY_HINT: &str = "Nothing to do. Type an item below and press Enter.";

/// What a click inside the list landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub position: usize,
    pub on_delete: bool,
}

/// Persistent state for the list view.
#[derive(Debug, Default)]
pub struct TodoListState {
    pub list_state: ListState,
    /// Height in lines of each rendered row, by position.
    pub row_heights: Vec<u16>,
    /// Outer area (including border) from the last render.
    pub area: Rect,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, position: Option<usize>) {
        self.list_state.select(position);
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(len - 1);
        self.select(Some(idx.min(len - 1)));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self.selected().map(|i| i + 1).unwrap_or(0);
        self.select(Some(idx.min(len - 1)));
    }

    /// Keep the selection on a real row after the list shrank.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.selected() {
            Some(_) if len == 0 => self.select(None),
            Some(i) if i >= len => self.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Map a screen coordinate to the row under it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RowHit> {
        let inner = inner_area(self.area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }

        let content_y = row - inner.y;
        let control_start = inner.x + inner.width.saturating_sub(control_width());

        let mut top: u16 = 0;
        for (position, &height) in self
            .row_heights
            .iter()
            .enumerate()
            .skip(self.list_state.offset())
        {
            if content_y < top + height {
                let on_delete = content_y == top && column >= control_start;
                return Some(RowHit {
                    position,
                    on_delete,
                });
            }
            top += height;
        }
        None
    }
}

/// Transient render wrapper for the list.
pub struct TodoList<'a> {
    items: &'a [String],
    state: &'a mut TodoListState,
    focused: bool,
}

impl<'a> TodoList<'a> {
    pub fn new(items: &'a [String], state: &'a mut TodoListState, focused: bool) -> Self {
        Self {
            items,
            state,
            focused,
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("To-do ({})", self.items.len()));

        if self.items.is_empty() {
            self.state.row_heights.clear();
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let inner_width = inner_area(area).width;
        let rows: Vec<Text<'static>> = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| row_text(position, item, inner_width))
            .collect();

        self.state.row_heights = rows.iter().map(|t| t.height() as u16).collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(rows.into_iter().map(ListItem::new))
            .block(block)
            .highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn inner_area(area: Rect) -> Rect {
    Block::bordered().inner(area)
}

fn control_width() -> u16 {
    DELETE_CONTROL.width() as u16
}

/// Build one row: `"<position+1>. <text>"`, wrapped, with the delete control
/// right-aligned on the first line.
pub fn row_text(position: usize, item: &str, width: u16) -> Text<'static> {
    let prefix = format!("{}. ", position + 1);
    let text_width = width.saturating_sub(control_width() + CONTROL_GAP).max(1) as usize;

    let indent = " ".repeat(prefix.width());
    let options = textwrap::Options::new(text_width).subsequent_indent(&indent);
    let label = format!("{prefix}{item}");
    let wrapped = textwrap::wrap(&label, options);

    let control_style = Style::default().fg(Color::Red);
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(wrapped.len().max(1));

    for (i, segment) in wrapped.iter().enumerate() {
        if i == 0 {
            let pad = text_width.saturating_sub(segment.width()) + CONTROL_GAP as usize;
            lines.push(Line::from(vec![
                Span::raw(segment.to_string()),
                Span::raw(" ".repeat(pad)),
                Span::styled(DELETE_CONTROL, control_style),
            ]));
        } else {
            lines.push(Line::raw(segment.to_string()));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(prefix),
            Span::styled(DELETE_CONTROL, control_style),
        ]));
    }

    Text::from(lines)
}
