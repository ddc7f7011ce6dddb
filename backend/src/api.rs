//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dashboard::ChartData;
pub use crate::routes::dashboard::DashboardCharts;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::DashboardFilter;
pub use crate::routes::dashboard::DashboardKpis;
pub use crate::routes::dashboard::FacetOptions;
pub use crate::routes::dashboard::PieChartData;
pub use crate::routes::dashboard::PieSlice;
pub use crate::routes::dashboard::PostoRow;
pub use crate::routes::dashboard::SeriesData;
pub use crate::routes::dashboard::TopPostoEntry;
pub use crate::routes::registry::PostoInfo;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Posto identifier (record primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostoId(pub Uuid);

impl PostoId {
    pub fn new(value: Uuid) -> Self {
        PostoId(value)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        PostoId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PostoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PostoId> for Uuid {
    fn from(id: PostoId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
