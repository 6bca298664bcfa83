use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AddButton, TitleBar, TodoList, add_button};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, recomputed every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub list: Rect,
    pub input: Rect,
    pub button: Rect,
}

/// Split the frame: title bar on top, list in the middle, input row at the bottom.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, list, bottom] = Layout::vertical([Length(1), Min(0), Length(3)]).areas(area);
    let [input, button] = Layout::horizontal([Min(0), Length(add_button::WIDTH)]).areas(bottom);
    ScreenLayout {
        title,
        list,
        input,
        button,
    }
}

/// Draw the whole screen from `App::items`. Nothing is patched incrementally:
/// every row is rebuilt on every frame.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(frame.area());
    tui.layout = layout;

    TitleBar::new(
        app.items.len(),
        app.status_message.clone(),
        app.error.clone(),
    )
    .render(frame, layout.title);

    TodoList::new(
        &app.items,
        &mut tui.todo_list,
        tui.focus == Focus::List,
    )
    .render(frame, layout.list);

    tui.input_box.focused = tui.focus == Focus::Input;
    tui.input_box.render(frame, layout.input);

    AddButton::new(!tui.input_box.buffer.is_empty()).render(frame, layout.button);
}
