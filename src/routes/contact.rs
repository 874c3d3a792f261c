use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::db;
use crate::email::OutgoingEmail;
use crate::error::AppError;
use crate::models::{ContactForm, ContactSubmission};
use crate::state::{AppState, SharedState};
use crate::submission::ValidJson;

use super::StatusResponse;

const SUBMIT_FAILED: &str = "Failed to submit form. Please try again.";
const THANK_YOU: &str = "Thank you! We'll get back to you within 24 hours.";

pub async fn submit(
    State(state): State<SharedState>,
    ValidJson(form): ValidJson<ContactForm>,
) -> Result<Json<StatusResponse>, AppError> {
    let contact = ContactSubmission::new(form, Utc::now());

    db::contacts::create(state.store.as_ref(), &contact)
        .await
        .map_err(AppError::store(SUBMIT_FAILED))?;

    notify(&state, &contact).await;

    Ok(Json(StatusResponse::success(THANK_YOU)))
}

/// Send the quote-request notification. The stored record is the outcome of
/// the request, so delivery failures are only logged.
async fn notify(state: &AppState, contact: &ContactSubmission) {
    let Some(mailer) = state.mailer.clone() else {
        tracing::warn!(
            "No email transport configured, skipping notification for {}",
            contact.email
        );
        return;
    };

    let email = match OutgoingEmail::contact_notification(&state.config.email, contact) {
        Ok(email) => email,
        Err(e) => {
            tracing::error!("Email sending failed: {e}");
            return;
        }
    };

    // Runs on its own task so a slow provider is not polled on the request task.
    let delivery = tokio::spawn(async move { mailer.send(&email).await });

    match delivery.await {
        Ok(Ok(())) => tracing::info!("Email sent for contact from {}", contact.email),
        Ok(Err(e)) => tracing::error!("Email sending failed: {e}"),
        Err(e) => tracing::error!("Email task failed: {e}"),
    }
}
