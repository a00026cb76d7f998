//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints. Status-code mapping
//! follows the transport contract: reads answer 200/404, creates answer 201
//! with a Location header, and update/delete answer 204 whether or not the
//! target existed.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use registry_core::Record;
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /entity` - filtered query over all records
pub(super) async fn list_entities(
    State(state): State<AppState>,
    Query(params): Query<EntityQueryParams>,
) -> Result<Json<Vec<Record>>, ServerError> {
    let criteria = params.into_criteria()?;
    let records = state.repository.query(&criteria).await?;
    Ok(Json(records))
}

/// `GET /entity/{id}` - single record lookup
pub(super) async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ServerError> {
    match state.repository.get_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ServerError::NotFound(format!("Record not found: {}", id))),
    }
}

/// `POST /entity` - create a record
pub(super) async fn create_entity(
    State(state): State<AppState>,
    JsonExtractor(record): JsonExtractor<Record>,
) -> Result<Response, ServerError> {
    let created = state.repository.create(record).await?;
    info!(id = %created.id, "record created");

    let location = format!("/entity/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// `PUT /entity/{id}` - whole-record replace
pub(super) async fn update_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(record): JsonExtractor<Record>,
) -> Result<StatusCode, ServerError> {
    if id != record.id {
        return Err(ServerError::InvalidRequest(format!(
            "Path id '{}' does not match body id '{}'",
            id, record.id
        )));
    }

    state.repository.update(record).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /entity/{id}` - remove a record if present
pub(super) async fn delete_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.repository.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
