//! Repository trait for the posto record store.
//!
//! The trait is the narrow seam between the metrics engine and whatever
//! holds the records. Every mutation returns the updated full collection:
//! the dashboard is always recomputed from a fresh snapshot, never from an
//! in-place edit.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::PostoId;
use crate::models::{Posto, PostoInput};

/// Record store operations for posto records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PostoRepository: Send + Sync {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch the full collection in insertion order (registration page).
    async fn list_postos(&self) -> RepositoryResult<Vec<Posto>>;

    /// Fetch the full collection ordered by attendance volume, descending
    /// (dashboard feed). Ties keep insertion order.
    async fn list_postos_by_attendances(&self) -> RepositoryResult<Vec<Posto>>;

    /// Fetch a single record.
    ///
    /// # Returns
    /// * `Ok(Posto)` - The record
    /// * `Err(RepositoryError::NotFound)` - If no record has the id
    async fn get_posto(&self, id: PostoId) -> RepositoryResult<Posto>;

    /// Store a new record and return the updated full collection.
    async fn create_posto(&self, input: PostoInput) -> RepositoryResult<Vec<Posto>>;

    /// Replace the fields of an existing record, keeping its id and
    /// creation timestamp, and return the updated full collection.
    async fn update_posto(&self, id: PostoId, input: PostoInput) -> RepositoryResult<Vec<Posto>>;

    /// Delete a record and return the updated full collection.
    async fn delete_posto(&self, id: PostoId) -> RepositoryResult<Vec<Posto>>;
}
