//! # Core Application Logic
//!
//! The to-do list itself: persistence, list operations, and the reducer that
//! turns user intent into list mutations. It knows nothing about terminals.
//!
//! ```text
//!      ┌──────────┐   Action    ┌──────────┐   append / remove_at   ┌─────────┐
//!      │   TUI    │ ──────────▶ │ update() │ ─────────────────────▶ │  List   │
//!      │ (ratatui)│             │  + App   │                        │ Service │
//!      └──────────┘ ◀────────── └──────────┘ ◀── items() ────────── └────┬────┘
//!                   App::items                                           │
//!                                                                   ┌────▼────┐
//!                                                                   │  Store  │
//!                                                                   └─────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: The `Store` trait plus file and in-memory implementations
//! - [`list`]: `ListService`, the read-modify-write list operations
//! - [`state`]: The `App` struct, all core state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Config file, env var, and CLI resolution

pub mod action;
pub mod config;
pub mod list;
pub mod state;
pub mod store;
