//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{routing::get, Router};
use registry_store::RecordRepository;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(repository: Arc<dyn RecordRepository>) -> Router {
    let state = AppState { repository };

    Router::new()
        .route("/health", get(health))
        .route("/entity", get(list_entities).post(create_entity))
        .route(
            "/entity/:id",
            get(get_entity).put(update_entity).delete(delete_entity),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
