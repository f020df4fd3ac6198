//! Book domain records
//!
//! The store treats every text field as opaque; `rating` in particular is
//! free-form (the UI convention is `"<n> stars"`, nothing here enforces
//! that).

use serde::{Deserialize, Serialize};

/// The sole domain record.
///
/// Field order is the persisted key order: id, title, genre, description,
/// rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique within the store, assigned by the store on create.
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub rating: String,
}

/// Create payload: a Book without an id.
///
/// Missing fields default to empty strings; `title` being required is a UI
/// contract, not a store invariant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
}

impl NewBook {
    /// Attach an assigned id, producing the stored record.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// Partial update: absent fields are preserved on merge.
///
/// An `id` field in the patch body is accepted and ignored; update never
/// changes a record's id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl BookPatch {
    /// Merge this patch over an existing record, field by field.
    ///
    /// The result keeps the existing record's id regardless of `self.id`.
    pub fn apply_to(&self, existing: &Book) -> Book {
        Book {
            id: existing.id,
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            genre: self.genre.clone().unwrap_or_else(|| existing.genre.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            rating: self
                .rating
                .clone()
                .unwrap_or_else(|| existing.rating.clone()),
        }
    }
}
