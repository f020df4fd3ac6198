//! # Record Store Backends
//!
//! Persistence of the full book collection as a single JSON document.
//! The backend is a trait so the service can run against an in-memory
//! store in tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::observability::{Logger, Severity};

use super::book::Book;
use super::errors::{StoreError, StoreResult};

/// Persistence backend for the book collection.
///
/// One document, whole-collection reads and writes. No partial access.
pub trait RecordStore: Send {
    /// Read the full collection.
    ///
    /// Fail-open: a missing, unreadable, or malformed document loads as an
    /// empty collection, never as an error. Callers depend on this.
    fn load(&self) -> Vec<Book>;

    /// Overwrite the full collection.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
}

/// On-disk backend: one pretty-printed JSON array.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given document path. The file need not
    /// exist yet; the first save creates it (and its parent directories).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Vec<Book> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                Logger::log(
                    Severity::Warn,
                    "store_read_failed",
                    &[("path", &self.path_str()), ("reason", &e.to_string())],
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(books) => books,
            Err(e) => {
                Logger::log(
                    Severity::Warn,
                    "store_parse_failed",
                    &[("path", &self.path_str()), ("reason", &e.to_string())],
                );
                Vec::new()
            }
        }
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(books)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        // Write to a sibling then rename, so the document is never
        // observable half-written.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Logger::log(
                Severity::Error,
                "store_write_failed",
                &[("path", &self.path_str()), ("reason", &e.to_string())],
            );
            StoreError::Io(e.to_string())
        })
    }
}

/// In-memory backend for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Vec<Book> {
        self.books.lock().expect("store lock poisoned").clone()
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        *self.books.lock().expect("store lock poisoned") = books.to_vec();
        Ok(())
    }
}
