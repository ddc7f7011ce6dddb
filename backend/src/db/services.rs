//! High-level record store functions.
//!
//! These sit between the HTTP handlers and the repository trait: validation
//! of form input, logging, and delegation. No metric logic lives here.

use tracing::debug;

use crate::api::PostoId;
use crate::models::{Posto, PostoInput};

use super::repository::{ErrorContext, PostoRepository, RepositoryError, RepositoryResult};

/// Check that the store is reachable.
pub async fn health_check(repo: &dyn PostoRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Full collection in insertion order (registration page).
pub async fn list_postos(repo: &dyn PostoRepository) -> RepositoryResult<Vec<Posto>> {
    repo.list_postos().await
}

/// Full collection ordered by attendance volume descending (dashboard feed).
pub async fn list_postos_by_attendances(
    repo: &dyn PostoRepository,
) -> RepositoryResult<Vec<Posto>> {
    repo.list_postos_by_attendances().await
}

/// Fetch a single record.
pub async fn get_posto(repo: &dyn PostoRepository, id: PostoId) -> RepositoryResult<Posto> {
    repo.get_posto(id).await
}

/// Validate and store a new record; returns the updated full collection.
pub async fn create_posto(
    repo: &dyn PostoRepository,
    input: PostoInput,
) -> RepositoryResult<Vec<Posto>> {
    validate_input(&input, "create_posto")?;
    debug!(name = %input.name, "creating posto");
    repo.create_posto(input).await
}

/// Validate and apply an update; returns the updated full collection.
pub async fn update_posto(
    repo: &dyn PostoRepository,
    id: PostoId,
    input: PostoInput,
) -> RepositoryResult<Vec<Posto>> {
    validate_input(&input, "update_posto")?;
    debug!(%id, "updating posto");
    repo.update_posto(id, input).await
}

/// Delete a record; returns the updated full collection.
pub async fn delete_posto(
    repo: &dyn PostoRepository,
    id: PostoId,
) -> RepositoryResult<Vec<Posto>> {
    debug!(%id, "deleting posto");
    repo.delete_posto(id).await
}

/// The only hard requirement on form input: a non-blank name. Numeric
/// garbage was already coerced to 0 at the deserialization boundary.
fn validate_input(input: &PostoInput, operation: &str) -> RepositoryResult<()> {
    if input.name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "posto name must not be blank",
            ErrorContext::new(operation).with_entity("posto"),
        ));
    }
    Ok(())
}
