//! # TitleBar Component
//!
//! Top status bar. Stateless: everything it shows is passed in as props.
//!
//! The title text changes based on state:
//!
//! 1. **Error**: `"Ticklist | 3 items | Error: storage I/O error: ..."`
//! 2. **Status message**: `"Ticklist | 3 items | Item added"`
//! 3. **Default**: `"Ticklist | 3 items"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub item_count: usize,
    pub status_message: String,
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(item_count: usize, status_message: String, error: Option<String>) -> Self {
        Self {
            item_count,
            status_message,
            error,
        }
    }

    fn count_label(&self) -> String {
        match self.item_count {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        }
    }

    pub fn title_text(&self) -> String {
        let base = format!("Ticklist | {}", self.count_label());
        if let Some(ref err) = self.error {
            format!("{base} | Error: {err}")
        } else if self.status_message.is_empty() {
            base
        } else {
            format!("{base} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let line = Line::from(Span::styled(self.title_text(), style));
        frame.render_widget(line, area);
    }
}
