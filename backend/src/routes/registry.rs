use serde::{Deserialize, Serialize};

use crate::api::PostoId;

// =========================================================
// Registry (cadastro) types
// =========================================================

/// Lightweight posto listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostoInfo {
    pub id: PostoId,
    pub name: String,
    pub kind: String,
    pub locality: String,
}

impl From<&crate::models::Posto> for PostoInfo {
    fn from(posto: &crate::models::Posto) -> Self {
        Self {
            id: posto.id,
            name: posto.name.clone(),
            kind: posto.kind.clone(),
            locality: posto.locality.clone(),
        }
    }
}

/// Route function name constants for the registry
pub const LIST_POSTOS: &str = "list_postos";
pub const CREATE_POSTO: &str = "create_posto";
pub const UPDATE_POSTO: &str = "update_posto";
pub const DELETE_POSTO: &str = "delete_posto";
