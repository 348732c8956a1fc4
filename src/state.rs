//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::BookService;

/// Handler state.
///
/// Built once at startup around the process-wide storage client and cloned
/// per request.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
}

impl AppState {
    pub fn new(book_service: Arc<BookService>) -> Self {
        Self { book_service }
    }
}
