pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::DocumentStore;
use crate::email::EmailSender;
use crate::state::{AppState, SharedState};

/// Assemble the router. Every collaborator is passed in so tests can swap
/// the store and the mailer.
pub fn build_app(
    store: Arc<dyn DocumentStore>,
    mailer: Option<Arc<dyn EmailSender>>,
    config: Config,
) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        mailer,
        config,
    });

    // Served at the root and under /api, where the public ingress forwards.
    Router::new()
        .merge(routes::api_routes())
        .nest("/api", routes::api_routes())
        .fallback(routes::not_found)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
