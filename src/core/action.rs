//! # Actions
//!
//! Everything the user can do to the list becomes an `Action`.
//! User presses Enter in the input? That's `Action::Submit(text)`.
//! User clicks a row's delete control? That's `Action::Delete(position)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the event loop what to do next.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every mutating action ends with `App::refresh()`, so the next frame always
//! renders what the store holds, never a locally patched copy.

use log::{debug, info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append the text as a new item. Empty text is ignored.
    Submit(String),
    /// Remove the item at this rendered position.
    Delete(usize),
    /// Re-read the list from the store.
    Refresh,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => {
            if text.is_empty() {
                return Effect::None;
            }
            match app.list.append(text) {
                Ok(()) => {
                    app.status_message = String::from("Item added");
                }
                Err(e) => {
                    warn!("Failed to add item: {}", e);
                    app.status_message = format!("Add failed: {}", e);
                }
            }
            app.refresh();
            Effect::None
        }
        Action::Delete(position) => {
            let in_range = position < app.items.len();
            match app.list.remove_at(position) {
                Ok(()) if in_range => {
                    app.status_message = format!("Removed item {}", position + 1);
                }
                Ok(()) => {}
                Err(e) => {
                    warn!("Failed to remove item {}: {}", position, e);
                    app.status_message = format!("Delete failed: {}", e);
                }
            }
            app.refresh();
            Effect::None
        }
        Action::Refresh => {
            app.refresh();
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failing_app, test_app, test_app_with};

    #[test]
    fn test_submit_appends_and_refreshes() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("A".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.items, vec!["A"]);
        assert_eq!(app.list.items().unwrap(), vec!["A"]);
    }

    #[test]
    fn test_submit_empty_is_ignored() {
        let mut app = test_app_with(&["A"]);
        let status_before = app.status_message.clone();
        let effect = update(&mut app, Action::Submit(String::new()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.items, vec!["A"]);
        assert_eq!(app.status_message, status_before);
    }

    #[test]
    fn test_submit_whitespace_is_kept_verbatim() {
        let mut app = test_app();
        update(&mut app, Action::Submit("  ".to_string()));
        assert_eq!(app.items, vec!["  "]);
    }

    #[test]
    fn test_delete_removes_position() {
        let mut app = test_app_with(&["A", "B", "C"]);
        update(&mut app, Action::Delete(1));
        assert_eq!(app.items, vec!["A", "C"]);
        assert_eq!(app.status_message, "Removed item 2");
    }

    #[test]
    fn test_delete_out_of_range_is_silent() {
        let mut app = test_app_with(&["A"]);
        let status_before = app.status_message.clone();
        update(&mut app, Action::Delete(5));
        assert_eq!(app.items, vec!["A"]);
        assert_eq!(app.status_message, status_before);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_refresh_picks_up_store_contents() {
        let mut app = test_app();
        app.list.append("written elsewhere").unwrap();
        assert!(app.items.is_empty());
        update(&mut app, Action::Refresh);
        assert_eq!(app.items, vec!["written elsewhere"]);
    }

    #[test]
    fn test_store_failures_are_reported_not_fatal() {
        let mut app = failing_app();
        assert!(app.error.is_some());

        let effect = update(&mut app, Action::Submit("A".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.status_message.starts_with("Add failed"));
        assert!(app.items.is_empty());

        update(&mut app, Action::Delete(0));
        assert!(app.status_message.starts_with("Delete failed"));
    }
}
