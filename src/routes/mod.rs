pub mod contact;
pub mod health;
pub mod newsletter;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use crate::error::AppError;
use crate::state::SharedState;

/// Body of every successful form response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }

    pub fn info(message: &'static str) -> Self {
        Self {
            status: "info",
            message,
        }
    }
}

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", post(contact::submit))
        .route("/newsletter", post(newsletter::subscribe))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
