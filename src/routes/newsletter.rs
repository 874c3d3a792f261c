use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::db::{self, StoreError};
use crate::error::AppError;
use crate::models::{NewsletterRequest, NewsletterSubscription};
use crate::state::SharedState;
use crate::submission::ValidJson;

use super::StatusResponse;

const SUBSCRIBE_FAILED: &str = "Subscription failed. Please try again.";
const SUBSCRIBED: &str = "Successfully subscribed to our newsletter!";
const ALREADY_SUBSCRIBED: &str = "You're already subscribed!";

/// Lookup then insert. The two steps are not atomic; concurrent requests for
/// one address can both insert unless the store enforces a unique index, in
/// which case the losing insert is reported as already subscribed.
pub async fn subscribe(
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewsletterRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let store = state.store.as_ref();

    if db::newsletter::exists(store, &req.email)
        .await
        .map_err(AppError::store(SUBSCRIBE_FAILED))?
    {
        return Ok(Json(StatusResponse::info(ALREADY_SUBSCRIBED)));
    }

    let subscription = NewsletterSubscription::new(req.email, Utc::now());

    match db::newsletter::create(store, &subscription).await {
        Ok(()) => Ok(Json(StatusResponse::success(SUBSCRIBED))),
        Err(StoreError::Duplicate(_)) => Ok(Json(StatusResponse::info(ALREADY_SUBSCRIBED))),
        Err(e) => Err(AppError::store(SUBSCRIBE_FAILED)(e)),
    }
}
