// Agent Analytics Hub - navigation shell around hosted analytics dashboards
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, index, list_pages, show_page};

/// Build the HTTP router over shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pages/:slug", get(show_page))
        .route("/api/pages", get(list_pages))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
