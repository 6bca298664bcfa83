//! # AddButton Component
//!
//! The clickable `Add` button next to the input. Stateless: it is drawn from
//! props, and the parent asks [`AddButton::hit`] whether a click landed on
//! the area it was last drawn into.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const LABEL: &str = "Add";

/// Width of the button including borders.
pub const WIDTH: u16 = 9;

pub struct AddButton {
    /// Dim the button while there is nothing to add.
    pub enabled: bool,
}

impl AddButton {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether a click at (`column`, `row`) falls on a button drawn in `area`.
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Component for AddButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.enabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );

        frame.render_widget(button, area);
    }
}
