//! DTOs for the book endpoints.
//!
//! JSON keys are camelCase and the identifier is exposed as `_id`, which
//! keeps the wire format compatible with existing clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Book, BookPatch, NewBook};

/// Request body for `POST /books`.
///
/// `title`, `author` and `publishedYear` are required. Unknown keys are
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[serde(default)]
    pub genre: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    /// Defaults to `0` when absent.
    pub rating: Option<f64>,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
}

impl From<CreateBookRequest> for NewBook {
    fn from(request: CreateBookRequest) -> Self {
        NewBook {
            title: request.title,
            author: request.author,
            published_year: request.published_year,
            genre: request.genre,
            language: request.language,
            country: request.country,
            rating: request.rating.unwrap_or_default(),
            summary: request.summary,
            cover_image_url: request.cover_image_url,
        }
    }
}

/// Request body for the update endpoints.
///
/// All fields are optional. Only provided fields are changed.
///
/// # Nullable fields
///
/// For `language`, `country`, `summary` and `coverImageUrl`:
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **Value** → set it
///
/// For the other fields `null` is treated like absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<Vec<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub language: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub country: Option<Option<String>>,
    pub rating: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub summary: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cover_image_url: Option<Option<String>>,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(request: UpdateBookRequest) -> Self {
        BookPatch {
            title: request.title,
            author: request.author,
            published_year: request.published_year,
            genre: request.genre,
            language: request.language,
            country: request.country,
            rating: request.rating,
            summary: request.summary,
            cover_image_url: request.cover_image_url,
        }
    }
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[serde(rename = "_id")]
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

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            id: book.id,
            title: book.title,
            author: book.author,
            published_year: book.published_year,
            genre: book.genre,
            language: book.language,
            country: book.country,
            rating: book.rating,
            summary: book.summary,
            cover_image_url: book.cover_image_url,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// `{"books": [...]}` envelope used by the list endpoints.
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<BookResponse>,
}

impl From<Vec<Book>> for BooksResponse {
    fn from(books: Vec<Book>) -> Self {
        BooksResponse {
            books: books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

/// Response for `POST /books`.
#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    pub message: &'static str,
    pub book: BookResponse,
}

/// Response for the update endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBookResponse {
    pub message: &'static str,
    pub updated_book: BookResponse,
}

/// Response for `DELETE /books/{book_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedBookResponse {
    pub message: &'static str,
    pub deleted_book: BookResponse,
}
