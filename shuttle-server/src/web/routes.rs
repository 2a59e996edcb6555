//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::shuttle::BusLocations;

use super::dto::{BUS_LOCATIONS_ERROR, ErrorResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/v1/bus-locations", get(bus_locations))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service banner.
async fn index() -> &'static str {
    "Concordia shuttle location service"
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch live bus locations from the shuttle site.
async fn bus_locations(State(state): State<AppState>) -> Result<Json<BusLocations>, AppError> {
    state
        .shuttle
        .fetch()
        .await
        .map(Json)
        .ok_or_else(|| AppError::Internal {
            message: BUS_LOCATIONS_ERROR.to_string(),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
