//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, reputations};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(reputation_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Reputation routes, served at the root path the dashboard reads
fn reputation_routes() -> Router<AppState> {
    Router::new().route("/reputations", get(reputations::list_reputations))
}
