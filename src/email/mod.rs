pub mod resend;
pub mod smtp;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::{EmailConfig, EmailTransport};
use crate::models::ContactSubmission;

pub use resend::ResendClient;
pub use smtp::SmtpMailer;

/// A fully rendered message, shaped like the Resend `POST /emails` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// The internal "new quote request" notification for a stored contact.
    pub fn contact_notification(
        config: &EmailConfig,
        contact: &ContactSubmission,
    ) -> Result<Self, EmailError> {
        Ok(Self {
            from: config.sender.clone(),
            to: vec![config.notify.clone()],
            subject: format!("New Quote Request from {}", contact.name),
            html: templates::render_contact_notification(contact)?,
        })
    }
}

#[derive(Debug)]
pub struct EmailError {
    pub message: String,
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EmailError {}

impl From<String> for EmailError {
    fn from(s: String) -> Self {
        EmailError { message: s }
    }
}

impl From<&str> for EmailError {
    fn from(s: &str) -> Self {
        EmailError {
            message: s.to_string(),
        }
    }
}

/// Best-effort delivery of a single message. Implementations do not retry.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// Build the configured sender, or `None` when no transport is configured.
pub fn build_sender(config: &EmailConfig) -> Result<Option<Arc<dyn EmailSender>>, EmailError> {
    let sender: Arc<dyn EmailSender> = match &config.transport {
        Some(EmailTransport::Smtp(smtp)) => Arc::new(SmtpMailer::new(smtp)?),
        Some(EmailTransport::Resend(resend)) => Arc::new(ResendClient::new(resend)?),
        None => return Ok(None),
    };
    Ok(Some(sender))
}
