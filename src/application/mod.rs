//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Book create, lookup, update and delete

pub mod services;
