//! Core domain entities.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. Creation and partial updates use separate input types:
//!
//! - [`Book`] - A stored book
//! - [`NewBook`] - Data for inserting a book
//! - [`BookPatch`] - Partial update applied by id or by title

pub mod book;

pub use book::{Book, BookPatch, NewBook};
