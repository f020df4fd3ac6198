//! # Book Store
//!
//! The persistence core: one JSON document holding the full book
//! collection, plus CRUD semantics layered on top.
//!
//! - [`Book`] / [`NewBook`] / [`BookPatch`] - domain records
//! - [`RecordStore`] - injectable persistence backend
//! - [`JsonFileStore`] - the on-disk backend (fail-open reads)
//! - [`BookService`] - list/get/create/update/delete with id assignment
//!   and field-level merge

pub mod book;
pub mod errors;
pub mod record_store;
pub mod service;

pub use book::{Book, BookPatch, NewBook};
pub use errors::{ServiceError, ServiceResult, StoreError, StoreResult};
pub use record_store::{JsonFileStore, MemoryStore, RecordStore};
pub use service::BookService;
