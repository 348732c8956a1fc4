//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod book_repository;

pub use book_repository::BookRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
