use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    BadRequest(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    NotFound(String),
    /// A store failure. `public` is what the client sees; the source is only logged.
    Store { public: &'static str, source: StoreError },
}

impl AppError {
    pub fn store(public: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { public, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported Media Type: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Store { public, source } => write!(f, "{public} ({source})"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedMediaType(msg) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.clone())
            }
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Store { public, source } => {
                tracing::error!("Store error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
        };

        let body = json!({ "detail": message });
        (status, axum::Json(body)).into_response()
    }
}
