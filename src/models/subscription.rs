use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

/// A stored newsletter opt-in (`newsletter` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
    pub subscribed_at: String,
}

impl NewsletterSubscription {
    pub fn new(email: String, subscribed_at: DateTime<Utc>) -> Self {
        Self {
            email,
            subscribed_at: iso_timestamp(subscribed_at),
        }
    }
}
