//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::list::ListService;
use crate::core::state::App;
use crate::core::store::{List, MemoryStore, Store, StoreError};

/// A store whose disk is always gone.
pub struct FailingStore;

impl Store for FailingStore {
    fn load(&self) -> Result<List, StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::NotFound, "disk gone")))
    }

    fn save(&mut self, _list: &[String]) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")))
    }
}

/// Creates a test App backed by an empty in-memory store.
pub fn test_app() -> App {
    App::new(ListService::new(Box::new(MemoryStore::new())))
}

/// Creates a test App whose store already holds `items`.
pub fn test_app_with(items: &[&str]) -> App {
    let store = MemoryStore::with_items(items.iter().copied()).unwrap();
    App::new(ListService::new(Box::new(store)))
}

/// Creates a test App whose every store access fails.
pub fn failing_app() -> App {
    App::new(ListService::new(Box::new(FailingStore)))
}
