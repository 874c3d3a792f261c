use validator::ValidateEmail;

use crate::models::{ContactForm, NewsletterRequest};

const MAX_EMAIL_LEN: usize = 254;

/// Payloads that are checked after deserialization and before any handler
/// side effect. Returns the (possibly normalized) value or a client-facing
/// reason.
pub trait Validate: Sized {
    fn validate(self) -> Result<Self, String>;
}

impl Validate for ContactForm {
    fn validate(mut self) -> Result<Self, String> {
        require_text("name", &self.name)?;
        self.email = normalize_email("email", &self.email)?;
        require_text("phone", &self.phone)?;
        require_text("business_type", &self.business_type)?;
        require_text("budget", &self.budget)?;
        Ok(self)
    }
}

impl Validate for NewsletterRequest {
    fn validate(mut self) -> Result<Self, String> {
        self.email = normalize_email("email", &self.email)?;
        Ok(self)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field}: field must not be empty"));
    }
    Ok(())
}

/// Trim the address and lowercase its domain. The local part is kept as is.
///
/// Internationalized addresses are accepted: the local part may carry
/// non-ASCII letters and the domain may be an IDN. The domain must have at
/// least two labels, and address literals are not accepted.
pub fn normalize_email(field: &str, raw: &str) -> Result<String, String> {
    let invalid = || format!("{field}: value is not a valid email address");

    let email = raw.trim();
    if email.is_empty() {
        return Err(format!("{field}: field must not be empty"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(invalid());
    }

    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    if local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
        || !domain.contains('.')
        || domain.starts_with('[')
    {
        return Err(invalid());
    }

    // validator's local-part grammar is ASCII atext only.
    let ascii_local: String = local
        .chars()
        .map(|c| if !c.is_ascii() && c.is_alphanumeric() { 'a' } else { c })
        .collect();
    if !format!("{ascii_local}@{domain}").validate_email() {
        return Err(invalid());
    }

    Ok(format!("{local}@{}", domain.to_lowercase()))
}
