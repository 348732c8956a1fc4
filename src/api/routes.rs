//! API route configuration.

use crate::api::handlers::{
    book_by_title_handler, books_by_author_handler, books_by_genre_handler,
    books_by_published_year_handler, books_released_in_2012_handler, create_book_handler,
    delete_book_handler, list_books_handler, update_book_by_id_handler,
    update_book_by_title_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All book routes.
///
/// # Endpoints
///
/// - `POST   /books`                        - Create a book
/// - `GET    /books`                        - List all books
/// - `GET    /books/title/{title}`          - Book by exact title
/// - `POST   /books/title/{title}`          - Partially update a book by title
/// - `GET    /books/author/{author}`        - Books by author
/// - `GET    /books/genre/{genre}`          - Books by genre tag
/// - `GET    /books/release-year-2012`      - Books published in 2012
/// - `GET    /books/published-year/{year}`  - Books published in `year`
/// - `POST   /books/{book_id}`              - Partially update a book by id
/// - `DELETE /books/{book_id}`              - Delete a book by id
///
/// The update routes also answer `PATCH`.
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/release-year-2012",
            get(books_released_in_2012_handler),
        )
        .route(
            "/books/published-year/{year}",
            get(books_by_published_year_handler),
        )
        .route(
            "/books/title/{title}",
            get(book_by_title_handler)
                .post(update_book_by_title_handler)
                .patch(update_book_by_title_handler),
        )
        .route("/books/author/{author}", get(books_by_author_handler))
        .route("/books/genre/{genre}", get(books_by_genre_handler))
        .route(
            "/books/{book_id}",
            post(update_book_by_id_handler)
                .patch(update_book_by_id_handler)
                .delete(delete_book_handler),
        )
}
