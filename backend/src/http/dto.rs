//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The visualization DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Dashboard
    ChartData, DashboardCharts, DashboardData, DashboardFilter, DashboardKpis, FacetOptions,
    PieChartData, PieSlice, PostoRow, SeriesData, TopPostoEntry,
    // Registry
    PostoInfo,
};
pub use crate::models::{Posto, PostoInput};

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    /// Facet filter on the posto kind
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Facet filter on the locality
    #[serde(default)]
    pub locality: Option<String>,
    /// 1-based table page (default 1)
    #[serde(default)]
    pub page: Option<usize>,
}

impl DashboardQuery {
    /// Normalize into the engine's filter (empty strings mean "no filter").
    pub fn filter(&self) -> DashboardFilter {
        DashboardFilter::new(self.kind.clone(), self.locality.clone())
    }

    /// Normalize the page: 1-based, absent or 0 becomes 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Response for posto collection mutations: the updated full collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostoCollectionResponse {
    /// Full collection after the mutation, insertion order
    pub postos: Vec<Posto>,
    /// Total count
    pub total: usize,
}

impl PostoCollectionResponse {
    pub fn new(postos: Vec<Posto>) -> Self {
        let total = postos.len();
        Self { postos, total }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Record store status
    pub store: String,
}
