//! In-memory repository implementation.
//!
//! Backs the default development and test configuration. Records live in a
//! `Vec` behind a `parking_lot` RwLock; insertion order is the collection's
//! prevailing order. The lock is never held across an await point.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::PostoId;
use crate::db::repository::{ErrorContext, PostoRepository, RepositoryError, RepositoryResult};
use crate::models::{Posto, PostoInput};

/// In-memory posto store.
#[derive(Default)]
pub struct LocalRepository {
    postos: RwLock<Vec<Posto>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with records, for tests.
    pub fn with_postos(postos: Vec<Posto>) -> Self {
        Self {
            postos: RwLock::new(postos),
        }
    }

    fn not_found(operation: &str, id: PostoId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("no posto with id {}", id),
            ErrorContext::new(operation)
                .with_entity("posto")
                .with_entity_id(id),
        )
    }
}

#[async_trait]
impl PostoRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_postos(&self) -> RepositoryResult<Vec<Posto>> {
        Ok(self.postos.read().clone())
    }

    async fn list_postos_by_attendances(&self) -> RepositoryResult<Vec<Posto>> {
        let mut postos = self.postos.read().clone();
        // Stable sort keeps insertion order between equal volumes.
        postos.sort_by(|a, b| b.attendances.cmp(&a.attendances));
        Ok(postos)
    }

    async fn get_posto(&self, id: PostoId) -> RepositoryResult<Posto> {
        self.postos
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get_posto", id))
    }

    async fn create_posto(&self, input: PostoInput) -> RepositoryResult<Vec<Posto>> {
        let posto = Posto::from_input(PostoId::random(), input, Some(Utc::now()));
        let mut postos = self.postos.write();
        postos.push(posto);
        Ok(postos.clone())
    }

    async fn update_posto(&self, id: PostoId, input: PostoInput) -> RepositoryResult<Vec<Posto>> {
        let mut postos = self.postos.write();
        match postos.iter().position(|p| p.id == id) {
            Some(index) => {
                postos[index].apply_input(input);
                Ok(postos.clone())
            }
            None => Err(Self::not_found("update_posto", id)),
        }
    }

    async fn delete_posto(&self, id: PostoId) -> RepositoryResult<Vec<Posto>> {
        let mut postos = self.postos.write();
        let before = postos.len();
        postos.retain(|p| p.id != id);
        if postos.len() == before {
            return Err(Self::not_found("delete_posto", id));
        }
        Ok(postos.clone())
    }
}
