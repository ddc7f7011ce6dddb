//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. The dashboard handler fetches a fresh
//! full collection from the store and runs the metrics engine over it;
//! clamping a stale page after a filter change is the frontend's job.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{DashboardQuery, HealthResponse, PostoCollectionResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DashboardData, PostoId};
use crate::db::services as db_services;
use crate::models::{Posto, PostoInput};
use crate::services::compute_dashboard_data;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the record
/// store is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Posto CRUD
// =============================================================================

/// GET /v1/postos
///
/// List the full posto collection in insertion order (registration page).
pub async fn list_postos(State(state): State<AppState>) -> HandlerResult<Vec<Posto>> {
    let postos = db_services::list_postos(state.repository.as_ref()).await?;
    Ok(Json(postos))
}

/// POST /v1/postos
///
/// Register a new posto. Returns the updated full collection.
pub async fn create_posto(
    State(state): State<AppState>,
    Json(input): Json<PostoInput>,
) -> Result<(StatusCode, Json<PostoCollectionResponse>), AppError> {
    let postos = db_services::create_posto(state.repository.as_ref(), input).await?;
    Ok((
        StatusCode::CREATED,
        Json(PostoCollectionResponse::new(postos)),
    ))
}

/// GET /v1/postos/{id}
///
/// Fetch a single posto (form edit view).
pub async fn get_posto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<Posto> {
    let posto = db_services::get_posto(state.repository.as_ref(), PostoId::new(id)).await?;
    Ok(Json(posto))
}

/// PUT /v1/postos/{id}
///
/// Update an existing posto. Returns the updated full collection.
pub async fn update_posto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PostoInput>,
) -> HandlerResult<PostoCollectionResponse> {
    let postos =
        db_services::update_posto(state.repository.as_ref(), PostoId::new(id), input).await?;
    Ok(Json(PostoCollectionResponse::new(postos)))
}

/// DELETE /v1/postos/{id}
///
/// Delete a posto. Returns the updated full collection.
pub async fn delete_posto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<PostoCollectionResponse> {
    let postos = db_services::delete_posto(state.repository.as_ref(), PostoId::new(id)).await?;
    Ok(Json(PostoCollectionResponse::new(postos)))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Compute the dashboard view model over a fresh snapshot of the collection,
/// served by the store in attendance-volume order like the original feed.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardData> {
    let postos = db_services::list_postos_by_attendances(state.repository.as_ref()).await?;
    let data = compute_dashboard_data(&postos, &query.filter(), query.page());
    Ok(Json(data))
}
