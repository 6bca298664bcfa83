//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the list, and
//! translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → dispatch() → Action → update() → App::refresh()
//!                                                                    │
//!                                   next frame: draw_ui(App::items) ◀┘
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event arrived (or on
//! the first frame). Between events it sleeps in `poll` for up to 500ms.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Position;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::list::ListService;
use crate::core::state::App;
use crate::core::store::{FileStore, MemoryStore, Store, StoreError};
use crate::tui::component::EventHandler;
use crate::tui::components::{AddButton, InputBox, InputEvent, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenLayout;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the new-item input. Enter submits.
    Input,
    /// Up/Down move the selection, `d`/Delete removes the selected row.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub todo_list: TodoListState,
    pub focus: Focus,
    /// Regions from the last draw, used to route mouse clicks.
    pub layout: ScreenLayout,
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
            todo_list: TodoListState::new(),
            focus: Focus::Input, // User expects to type immediately
            layout: ScreenLayout::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the store a resolved config asks for.
pub fn build_store(config: &ResolvedConfig) -> Result<Box<dyn Store>, StoreError> {
    if config.ephemeral {
        info!("Using in-memory store; nothing will be persisted");
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = FileStore::new(config.data_dir.clone(), config.key.clone())?;
    info!("Using list at {}", store.path().display());
    Ok(Box::new(store))
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let store = build_store(&config).map_err(io::Error::other)?;
    let mut app = App::new(ListService::new(store));
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Ticklist exiting with {} item(s)", app.items.len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if dispatch(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event to the focused component and apply the resulting action.
///
/// Mouse clicks are routed by screen region regardless of focus, using the
/// layout from the last draw.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        // Pick up edits made to the slot by another process
        TuiEvent::Resize => return update(app, Action::Refresh),
        TuiEvent::MouseClick(column, row) => return handle_click(app, tui, column, row),
        TuiEvent::ScrollUp => {
            tui.todo_list.select_prev(app.items.len());
            return Effect::None;
        }
        TuiEvent::ScrollDown => {
            tui.todo_list.select_next(app.items.len());
            return Effect::None;
        }
        _ => {}
    }

    match tui.focus {
        Focus::Input => match event {
            TuiEvent::Escape | TuiEvent::FocusNext => {
                focus_list(app, tui);
                Effect::None
            }
            _ => match tui.input_box.handle_event(&event) {
                Some(InputEvent::Submit(text)) => update(app, Action::Submit(text)),
                Some(InputEvent::ContentChanged) | None => Effect::None,
            },
        },
        Focus::List => match event {
            TuiEvent::Escape | TuiEvent::FocusNext | TuiEvent::Submit => {
                tui.focus = Focus::Input;
                Effect::None
            }
            TuiEvent::CursorUp => {
                tui.todo_list.select_prev(app.items.len());
                Effect::None
            }
            TuiEvent::CursorDown => {
                tui.todo_list.select_next(app.items.len());
                Effect::None
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete | TuiEvent::Backspace => {
                match tui.todo_list.selected() {
                    Some(position) => delete_at(app, tui, position),
                    None => Effect::None,
                }
            }
            // Typing auto-switches to the input and forwards the keystroke
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                tui.focus = Focus::Input;
                tui.input_box.handle_event(&event);
                Effect::None
            }
            _ => Effect::None,
        },
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    if AddButton::hit(tui.layout.button, column, row) {
        tui.focus = Focus::Input;
        return match tui.input_box.take_submission() {
            Some(text) => update(app, Action::Submit(text)),
            None => Effect::None,
        };
    }

    if tui.layout.input.contains(Position::new(column, row)) {
        tui.focus = Focus::Input;
        return Effect::None;
    }

    match tui.todo_list.hit_test(column, row) {
        Some(hit) if hit.on_delete => delete_at(app, tui, hit.position),
        Some(hit) => {
            tui.focus = Focus::List;
            tui.todo_list.select(Some(hit.position));
            Effect::None
        }
        None => Effect::None,
    }
}

fn focus_list(app: &App, tui: &mut TuiState) {
    if app.items.is_empty() {
        return;
    }
    tui.focus = Focus::List;
    if tui.todo_list.selected().is_none() {
        tui.todo_list.select(Some(0));
    }
}

fn delete_at(app: &mut App, tui: &mut TuiState, position: usize) -> Effect {
    let effect = update(app, Action::Delete(position));
    tui.todo_list.clamp_selection(app.items.len());
    if app.items.is_empty() {
        tui.focus = Focus::Input;
    }
    effect
}
