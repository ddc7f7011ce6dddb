//! Factory for creating repository instances.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{PostoRepository, RepositoryError, RepositoryResult};

/// Supported repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory store (development and tests).
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(RepositoryType::Local),
            other => Err(format!("Unknown repository type: {}", other)),
        }
    }
}

/// Factory for repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository for the given backend type.
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn PostoRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create the in-memory repository.
    pub fn create_local() -> Arc<dyn PostoRepository> {
        Arc::new(LocalRepository::new())
    }
}

impl RepositoryType {
    /// Parse a repository type, mapping failures onto a configuration error.
    pub fn parse(s: &str) -> RepositoryResult<Self> {
        Self::from_str(s).map_err(RepositoryError::configuration)
    }
}
