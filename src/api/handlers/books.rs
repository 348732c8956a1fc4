//! Handlers for the book endpoints.
//!
//! Every handler makes exactly one accessor call and maps the outcome:
//!
//! - match → 200/201 with the documented envelope
//! - no match → 404 `{"message"}`
//! - storage failure → 500 `{"error"}` with a route-specific message

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::book::{
    BookResponse, BooksResponse, CreateBookRequest, CreatedBookResponse, DeletedBookResponse,
    UpdateBookRequest, UpdatedBookResponse,
};
use crate::domain::entities::Book;
use crate::error::{AppError, ResultExt};
use crate::state::AppState;

const NO_BOOKS_FOUND: &str = "No books found.";
const BOOK_DOES_NOT_EXIST: &str = "Book does not exist";
const BOOK_UPDATED: &str = "Book updated successfully";

/// Year served by the fixed `release-year-2012` route.
pub const LEGACY_RELEASE_YEAR: i32 = 2012;

/// Wraps a non-empty list in `{"books": [...]}`, otherwise 404.
fn books_or_not_found(books: Vec<Book>, message: &str) -> Result<Json<BooksResponse>, AppError> {
    if books.is_empty() {
        return Err(not_found(message));
    }
    Ok(Json(BooksResponse::from(books)))
}

fn not_found(message: &str) -> AppError {
    tracing::debug!(message, "No matching book");
    AppError::not_found(message)
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Lean In",
///   "author": "Sheryl Sandberg",
///   "publishedYear": 2012,
///   "genre": ["Non-fiction", "Business"],
///   "rating": 4.1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded.
/// Returns 500 if storage rejects the insert.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedBookResponse>), AppError> {
    let Json(payload) = payload?;

    let book = state
        .book_service
        .create(payload.into())
        .await
        .or_internal("Failed to add book.")?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookResponse {
            message: "Book added successfully.",
            book: book.into(),
        }),
    ))
}

/// Lists every book.
///
/// # Endpoint
///
/// `GET /books`
///
/// # Errors
///
/// Returns 404 Not Found if the collection is empty.
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<BooksResponse>, AppError> {
    let books = state
        .book_service
        .list_all()
        .await
        .or_internal("Failed to fetch books.")?;

    books_or_not_found(books, "No book found.")
}

/// Returns the book with an exact title match.
///
/// # Endpoint
///
/// `GET /books/title/{title}`
///
/// The book itself is the response body, without an envelope.
pub async fn book_by_title_handler(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(title) = title?;

    state
        .book_service
        .find_by_title(&title)
        .await
        .or_internal("Failed to fetch books.")?
        .map(|book| Json(book.into()))
        .ok_or_else(|| not_found("Book not found."))
}

/// Lists books by author.
///
/// # Endpoint
///
/// `GET /books/author/{author}`
pub async fn books_by_author_handler(
    State(state): State<AppState>,
    author: Result<Path<String>, PathRejection>,
) -> Result<Json<BooksResponse>, AppError> {
    let Path(author) = author?;

    let books = state
        .book_service
        .find_by_author(&author)
        .await
        .or_internal("Failed to fetch books by author name.")?;

    books_or_not_found(books, NO_BOOKS_FOUND)
}

/// Lists books tagged with a genre.
///
/// # Endpoint
///
/// `GET /books/genre/{genre}`
pub async fn books_by_genre_handler(
    State(state): State<AppState>,
    genre: Result<Path<String>, PathRejection>,
) -> Result<Json<BooksResponse>, AppError> {
    let Path(genre) = genre?;

    let books = state
        .book_service
        .find_by_genre(&genre)
        .await
        .or_internal("Failed to fetch books by genre.")?;

    books_or_not_found(books, NO_BOOKS_FOUND)
}

/// Lists books released in 2012.
///
/// # Endpoint
///
/// `GET /books/release-year-2012`
///
/// Kept for existing clients; same query as
/// `GET /books/published-year/2012`.
pub async fn books_released_in_2012_handler(
    State(state): State<AppState>,
) -> Result<Json<BooksResponse>, AppError> {
    let books = state
        .book_service
        .find_by_published_year(LEGACY_RELEASE_YEAR)
        .await
        .or_internal("Failed to fetch books by release year 2012.")?;

    books_or_not_found(books, NO_BOOKS_FOUND)
}

/// Lists books published in the given year.
///
/// # Endpoint
///
/// `GET /books/published-year/{year}`
///
/// # Errors
///
/// Returns 400 Bad Request if `year` is not an integer.
pub async fn books_by_published_year_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Result<Json<BooksResponse>, AppError> {
    let Path(year) = year?;

    let books = state
        .book_service
        .find_by_published_year(year)
        .await
        .or_internal("Failed to fetch books by release year.")?;

    books_or_not_found(books, NO_BOOKS_FOUND)
}

/// Partially updates the book with the given id.
///
/// # Endpoint
///
/// `POST /books/{book_id}` (also accepted as `PATCH`)
///
/// # Request Body
///
/// Any subset of the book fields, e.g. `{"rating": 4.5}`.
///
/// # Errors
///
/// Returns 404 `{"message": "Book does not exist"}` if no book has that id.
pub async fn update_book_by_id_handler(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<UpdatedBookResponse>, AppError> {
    let Path(book_id) = book_id?;
    let Json(payload) = payload?;

    let updated = state
        .book_service
        .update_by_id(&book_id, payload.into())
        .await
        .or_internal("Failed to update book by book id.")?
        .ok_or_else(|| not_found(BOOK_DOES_NOT_EXIST))?;

    Ok(Json(UpdatedBookResponse {
        message: BOOK_UPDATED,
        updated_book: updated.into(),
    }))
}

/// Partially updates the first book with an exact title match.
///
/// # Endpoint
///
/// `POST /books/title/{title}` (also accepted as `PATCH`)
///
/// # Errors
///
/// Returns 404 `{"message": "Book does not exist"}` if no title matches.
pub async fn update_book_by_title_handler(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<UpdatedBookResponse>, AppError> {
    let Path(title) = title?;
    let Json(payload) = payload?;

    let updated = state
        .book_service
        .update_by_title(&title, payload.into())
        .await
        .or_internal("Failed to update book by title.")?
        .ok_or_else(|| not_found(BOOK_DOES_NOT_EXIST))?;

    Ok(Json(UpdatedBookResponse {
        message: BOOK_UPDATED,
        updated_book: updated.into(),
    }))
}

/// Deletes the book with the given id.
///
/// # Endpoint
///
/// `DELETE /books/{book_id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Book not found"}` if no book has that id,
/// including when it was already deleted.
pub async fn delete_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedBookResponse>, AppError> {
    let Path(book_id) = book_id?;

    let deleted = state
        .book_service
        .delete_by_id(&book_id)
        .await
        .or_internal("Failed to delete book by book id.")?
        .ok_or_else(|| not_found("Book not found"))?;

    Ok(Json(DeletedBookResponse {
        message: "Book deleted successfully",
        deleted_book: deleted.into(),
    }))
}
