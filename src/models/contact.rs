use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_timestamp;

/// Inbound contact form payload, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub budget: String,
    #[serde(default)]
    pub message: String,
}

/// A stored quote request (`contacts` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub budget: String,
    pub message: String,
    pub created_at: String,
}

impl ContactSubmission {
    /// Expects a form that already passed validation.
    pub fn new(form: ContactForm, created_at: DateTime<Utc>) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            business_type: form.business_type,
            budget: form.budget,
            message: form.message,
            created_at: iso_timestamp(created_at),
        }
    }
}
