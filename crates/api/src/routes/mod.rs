//! API routes

pub mod alias_options;
pub mod health;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth::require_api_key, state::AppState};

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Alias option routes, called cross-origin by browser extensions
    let alias_routes = Router::new()
        .route("/alias/options", get(alias_options::options))
        .route("/v2/alias/options", get(alias_options::options_v2))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(health_routes)
        .merge(alias_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
