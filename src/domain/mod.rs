//! Domain layer containing the book entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. The repository
//! trait is implemented in [`crate::infrastructure::persistence`] and consumed
//! by [`crate::application::services::BookService`].

pub mod entities;
pub mod repositories;
