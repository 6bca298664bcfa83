//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing item count and status
//! - `AddButton`: Clickable submit button beside the input
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line text field for new items
//! - `TodoList`: Numbered rows with per-row delete controls and hit testing
//!
//! Components receive external data as props, not by reaching into global
//! state, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status bar)
//! ├── add_button.rs  (Submit button)
//! ├── todo_list.rs   (Item rows + delete controls)
//! └── input_box/     (Text input + cursor tracking)
//! ```

pub mod add_button;
pub mod input_box;
pub mod title_bar;
pub mod todo_list;

pub use add_button::AddButton;
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use todo_list::{TodoList, TodoListState};
