use std::path::Path;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use updown_core::health::{healthz, readyz};
use updown_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::counter::{down, up, updates, value};
use crate::state::AppState;

/// Counter API only; unknown paths are 404.
pub fn build_router(state: AppState) -> Router {
    api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}

/// Counter API plus the static page under `dist_dir` for every other path.
pub fn build_router_with_dist(state: AppState, dist_dir: &Path) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(dist_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}

fn api_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Counter
        .route("/up", get(up))
        .route("/down", get(down))
        .route("/value", get(value))
        .route("/updates", get(updates))
        .with_state(state)
}
