//! Book entity and its creation/update inputs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted book.
///
/// `id`, `created_at` and `updated_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: f64,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new book.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: f64,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
}

/// Partial update for an existing book.
///
/// `None` fields are left unchanged. For nullable columns
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<Vec<String>>,
    pub language: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub rating: Option<f64>,
    pub summary: Option<Option<String>>,
    pub cover_image_url: Option<Option<String>>,
}

impl BookPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
