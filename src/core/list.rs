//! # List Service
//!
//! The operations the UI is allowed to perform on the to-do list. Each one is
//! a full read-modify-write against the injected [`Store`]; nothing is cached
//! here, so the store is always the source of truth.
//!
//! Items have no ids. A position is only meaningful against the list that was
//! last rendered, which holds because every mutation comes from the single UI
//! event loop.

use log::debug;

use crate::core::store::{List, Store, StoreError};

pub struct ListService {
    store: Box<dyn Store>,
}

impl ListService {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    /// Fetch the current list.
    pub fn items(&self) -> Result<List, StoreError> {
        self.store.load()
    }

    /// Append `item` at the end. No dedup, trimming, or length limit.
    pub fn append(&mut self, item: impl Into<String>) -> Result<(), StoreError> {
        let mut list = self.store.load()?;
        list.push(item.into());
        debug!("Appending item, list length now {}", list.len());
        self.store.save(&list)
    }

    /// Remove the item at `index`, keeping the rest in order.
    ///
    /// An out-of-range index filters nothing out: the list is written back
    /// unchanged and no error is returned.
    pub fn remove_at(&mut self, index: usize) -> Result<(), StoreError> {
        let list = self.store.load()?;
        let before = list.len();
        let list = without_index(list, index);
        if list.len() == before {
            debug!("remove_at({index}) out of range for {before} item(s), list unchanged");
        }
        self.store.save(&list)
    }
}

/// A copy of `list` with the element at `index` excluded.
pub fn without_index(list: List, index: usize) -> List {
    list.into_iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item)
        .collect()
}
