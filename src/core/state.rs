//! # Application State
//!
//! Core business state for Ticklist. No TUI types live here; presentation
//! state (focus, input buffer, selection) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── list: ListService          // read-modify-write against the Store
//! ├── items: List                // snapshot re-read after every mutation
//! ├── status_message: String     // status bar text
//! └── error: Option<String>      // last storage failure, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;

use crate::core::list::ListService;
use crate::core::store::List;

pub struct App {
    pub list: ListService,
    pub items: List,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    /// Build the app and read the initial list from the store.
    pub fn new(list: ListService) -> Self {
        let mut app = Self {
            list,
            items: List::new(),
            status_message: String::from("Welcome to Ticklist!"),
            error: None,
        };
        app.refresh();
        app
    }

    /// Re-read the full list from the store.
    ///
    /// On failure the previous snapshot stays on screen and the error is
    /// reported in the status bar.
    pub fn refresh(&mut self) {
        match self.list.items() {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load list: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}
