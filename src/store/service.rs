//! # Book Service
//!
//! CRUD semantics over a [`RecordStore`]: every operation is one full
//! load, an in-memory mutation, and (for writes) one full save. There is
//! no intermediate observable state.

use super::book::{Book, BookPatch, NewBook};
use super::errors::{ServiceError, ServiceResult};
use super::record_store::RecordStore;

/// Sequence-level CRUD over a record store.
pub struct BookService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All books, in stored order.
    pub fn list(&self) -> Vec<Book> {
        self.store.load()
    }

    /// First book whose id matches.
    pub fn get(&self, id: i64) -> ServiceResult<Book> {
        self.store
            .load()
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(ServiceError::NotFound(id))
    }

    /// Assign an id, append, persist.
    ///
    /// The next id is the LAST element's id + 1 (1 on an empty store), not
    /// the maximum. Deleting the tail record therefore makes its id get
    /// reused by the next create. Callers relying on stored order get
    /// monotonic ids; arbitrary edits to the document can produce
    /// collisions.
    pub fn create(&self, new: NewBook) -> ServiceResult<Book> {
        let mut books = self.store.load();
        let id = books.last().map_or(1, |last| last.id + 1);
        let book = new.into_book(id);
        books.push(book.clone());
        self.store.save(&books)?;
        Ok(book)
    }

    /// Merge a partial update over the record with the given id.
    ///
    /// Absent patch fields are preserved; the id never changes. The merged
    /// record keeps its position in the sequence.
    pub fn update(&self, id: i64, patch: &BookPatch) -> ServiceResult<Book> {
        let mut books = self.store.load();
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        let merged = patch.apply_to(&books[index]);
        books[index] = merged.clone();
        self.store.save(&books)?;
        Ok(merged)
    }

    /// Remove every record with the given id (normally exactly one).
    ///
    /// A miss returns `NotFound` without touching the document.
    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        let books = self.store.load();
        let initial_len = books.len();
        let remaining: Vec<Book> = books.into_iter().filter(|b| b.id != id).collect();

        if remaining.len() == initial_len {
            return Err(ServiceError::NotFound(id));
        }

        self.store.save(&remaining)?;
        Ok(())
    }
}
