//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;

pub use books::{
    book_by_title_handler, books_by_author_handler, books_by_genre_handler,
    books_by_published_year_handler, books_released_in_2012_handler, create_book_handler,
    delete_book_handler, list_books_handler, update_book_by_id_handler,
    update_book_by_title_handler,
};
pub use health::health_handler;
