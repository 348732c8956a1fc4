//! Repository trait for book data access.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage contract for the `books` collection.
///
/// Every lookup reports "no match" as `Ok(None)` or an empty `Vec`.
/// `Err` is reserved for storage failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors, including
    /// constraint violations such as an out-of-range rating.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Returns every stored book, oldest first.
    async fn list_all(&self) -> Result<Vec<Book>, AppError>;

    /// Finds the earliest-created book whose title matches exactly.
    async fn find_by_title(&self, title: &str) -> Result<Option<Book>, AppError>;

    /// Returns all books by `author` (exact match).
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError>;

    /// Returns all books tagged with `genre`.
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, AppError>;

    /// Returns all books published in `year`.
    async fn find_by_published_year(&self, year: i32) -> Result<Vec<Book>, AppError>;

    /// Applies `patch` to the book with `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` with the updated state
    /// - `Ok(None)` if no book has that id
    async fn update_by_id(&self, id: Uuid, patch: BookPatch) -> Result<Option<Book>, AppError>;

    /// Applies `patch` to the earliest-created book titled `title`.
    async fn update_by_title(
        &self,
        title: &str,
        patch: BookPatch,
    ) -> Result<Option<Book>, AppError>;

    /// Removes the book with `id` and returns it, or `Ok(None)` if absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError>;

    /// Round-trips to the database.
    async fn ping(&self) -> Result<(), AppError>;
}
