use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

use super::{EmailError, EmailSender, OutgoingEmail};

/// Delivers notifications through an SMTP relay with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, EmailError> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| EmailError::from(format!("SMTP relay error: {e}")))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self { transport })
    }
}

/// Turn an outgoing email into a MIME message with an HTML body.
pub fn build_message(email: &OutgoingEmail) -> Result<Message, EmailError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| EmailError::from(format!("Invalid from address: {e}")))?;

    let mut builder = Message::builder().from(from).subject(email.subject.as_str());
    for to in &email.to {
        let to: Mailbox = to
            .parse()
            .map_err(|e| EmailError::from(format!("Invalid to address: {e}")))?;
        builder = builder.to(to);
    }

    builder
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| EmailError::from(format!("Failed to build email: {e}")))
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::from(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
