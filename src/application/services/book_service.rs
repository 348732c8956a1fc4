//! Book accessor service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Translates handler inputs into repository calls.
///
/// Lookups return `Ok(None)` or an empty `Vec` when nothing matches. Storage
/// failures are logged here, with the operation name, and returned as `Err`.
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new book and returns it with its assigned id.
    pub async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = self
            .repository
            .create(new_book)
            .await
            .inspect_err(|e| log_failure("create", e))?;

        tracing::info!(book_id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Returns every stored book.
    pub async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        self.repository
            .list_all()
            .await
            .inspect_err(|e| log_failure("list_all", e))
    }

    /// Finds a book by exact, case-sensitive title.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Book>, AppError> {
        self.repository
            .find_by_title(title)
            .await
            .inspect_err(|e| log_failure("find_by_title", e))
    }

    /// Returns all books by `author`.
    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        self.repository
            .find_by_author(author)
            .await
            .inspect_err(|e| log_failure("find_by_author", e))
    }

    /// Returns all books carrying the `genre` tag.
    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, AppError> {
        self.repository
            .find_by_genre(genre)
            .await
            .inspect_err(|e| log_failure("find_by_genre", e))
    }

    /// Returns all books published in `year`.
    pub async fn find_by_published_year(&self, year: i32) -> Result<Vec<Book>, AppError> {
        self.repository
            .find_by_published_year(year)
            .await
            .inspect_err(|e| log_failure("find_by_published_year", e))
    }

    /// Applies `patch` to the book identified by `book_id`.
    ///
    /// An id that is not a valid storage identifier cannot name a book and
    /// yields `Ok(None)` without touching storage.
    pub async fn update_by_id(
        &self,
        book_id: &str,
        patch: BookPatch,
    ) -> Result<Option<Book>, AppError> {
        let Some(id) = parse_book_id(book_id) else {
            return Ok(None);
        };

        if patch.is_empty() {
            tracing::debug!(book_id = %id, "Empty patch, only updated_at changes");
        }

        self.repository
            .update_by_id(id, patch)
            .await
            .inspect_err(|e| log_failure("update_by_id", e))
    }

    /// Applies `patch` to the first book titled `title`.
    pub async fn update_by_title(
        &self,
        title: &str,
        patch: BookPatch,
    ) -> Result<Option<Book>, AppError> {
        self.repository
            .update_by_title(title, patch)
            .await
            .inspect_err(|e| log_failure("update_by_title", e))
    }

    /// Removes the book identified by `book_id` and returns it.
    pub async fn delete_by_id(&self, book_id: &str) -> Result<Option<Book>, AppError> {
        let Some(id) = parse_book_id(book_id) else {
            return Ok(None);
        };

        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| log_failure("delete_by_id", e))?;

        if deleted.is_some() {
            tracing::info!(book_id = %id, "Book deleted");
        }
        Ok(deleted)
    }

    /// Checks that storage is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn parse_book_id(book_id: &str) -> Option<Uuid> {
    match Uuid::parse_str(book_id) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!(book_id, error = %e, "Malformed book id");
            None
        }
    }
}

fn log_failure(operation: &'static str, error: &AppError) {
    tracing::error!(operation, error = %error, "Book storage operation failed");
}
