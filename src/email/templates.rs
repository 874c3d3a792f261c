use askama::Template;

use crate::models::ContactSubmission;

use super::EmailError;

#[derive(Template)]
#[template(path = "email/contact_notification.html")]
struct ContactNotificationTemplate<'a> {
    rows: [(&'a str, &'a str); 6],
}

pub fn render_contact_notification(contact: &ContactSubmission) -> Result<String, EmailError> {
    let message = if contact.message.is_empty() {
        "N/A"
    } else {
        contact.message.as_str()
    };

    ContactNotificationTemplate {
        rows: [
            ("Name", contact.name.as_str()),
            ("Email", contact.email.as_str()),
            ("Phone", contact.phone.as_str()),
            ("Business Type", contact.business_type.as_str()),
            ("Budget", contact.budget.as_str()),
            ("Message", message),
        ],
    }
    .render()
    .map_err(|e| EmailError::from(format!("Failed to render notification: {e}")))
}
