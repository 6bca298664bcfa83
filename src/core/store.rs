//! # List Persistence
//!
//! One named slot of key-value storage holds the whole to-do list as a JSON
//! array of strings:
//!
//! ```text
//! ~/.ticklist/list.json   →   ["Buy milk","Call Bob"]
//! ```
//!
//! There are no partial updates. Every mutation loads the full list, builds
//! a new one, and overwrites the slot. A missing or empty slot reads as an
//! empty list.
//!
//! `FileStore` writes through `.tmp` + `rename()` so a crash mid-write never
//! leaves a truncated slot behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

/// The ordered sequence of to-do items. Position = display order.
pub type List = Vec<String>;

/// Slot name used when nothing else is configured.
pub const DEFAULT_KEY: &str = "list";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    InvalidKey(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Encode(e) => write!(f, "failed to encode list: {e}"),
            StoreError::Decode(e) => write!(f, "stored list is malformed: {e}"),
            StoreError::InvalidKey(key) => write!(f, "invalid storage key: {key:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Encode(e) | StoreError::Decode(e) => Some(e),
            StoreError::InvalidKey(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

// ============================================================================
// Store Trait
// ============================================================================

/// Persistence for the single serialized list.
pub trait Store {
    /// Read the persisted list. An absent slot is an empty list.
    fn load(&self) -> Result<List, StoreError>;

    /// Encode `list` and overwrite the slot unconditionally.
    fn save(&mut self, list: &[String]) -> Result<(), StoreError>;
}

/// Encode a list the way every store persists it (compact JSON array).
pub fn encode(list: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(list).map_err(StoreError::Encode)
}

/// Decode a persisted blob. Empty or whitespace-only blobs are an empty list.
pub fn decode(blob: &str) -> Result<List, StoreError> {
    if blob.trim().is_empty() {
        return Ok(List::new());
    }
    serde_json::from_str(blob).map_err(StoreError::Decode)
}

// ============================================================================
// File-backed Store
// ============================================================================

/// Stores the slot `key` as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    /// Rejects keys that would escape `dir` or name no file at all.
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(StoreError::InvalidKey(key));
        }
        Ok(Self {
            dir: dir.into(),
            key,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path of the slot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
        && key != "."
        && !key.contains("..")
        && !key.contains(['/', '\\'])
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl Store for FileStore {
    fn load(&self) -> Result<List, StoreError> {
        let path = self.path();
        if !path.exists() {
            debug!("No list at {}, starting empty", path.display());
            return Ok(List::new());
        }
        let blob = fs::read_to_string(&path)?;
        decode(&blob)
    }

    fn save(&mut self, list: &[String]) -> Result<(), StoreError> {
        let blob = encode(list)?;
        if !self.dir.exists() {
            info!("Creating data directory {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        atomic_write(&self.path(), &blob)?;
        debug!("Saved {} item(s) to {}", list.len(), self.path().display());
        Ok(())
    }
}

// ============================================================================
// In-memory Store
// ============================================================================

/// Keeps the encoded blob in memory. Lives as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an existing list.
    pub fn with_items<I, S>(items: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: List = items.into_iter().map(Into::into).collect();
        Ok(Self {
            blob: Some(encode(&list)?),
        })
    }

    /// The raw persisted text, if anything has been written.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<List, StoreError> {
        match &self.blob {
            Some(blob) => decode(blob),
            None => Ok(List::new()),
        }
    }

    fn save(&mut self, list: &[String]) -> Result<(), StoreError> {
        self.blob = Some(encode(list)?);
        Ok(())
    }
}
