//! Application state for the HTTP server.

use crate::db::repository::PostoRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for record store operations
    pub repository: Arc<dyn PostoRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn PostoRepository>) -> Self {
        Self { repository }
    }
}
