use crate::models::NewsletterSubscription;

use super::{DocumentStore, StoreError, to_document};

pub const COLLECTION: &str = "newsletter";

/// Whether any subscription document carries exactly this address.
pub async fn exists(store: &dyn DocumentStore, email: &str) -> Result<bool, StoreError> {
    Ok(store.find_one(COLLECTION, "email", email).await?.is_some())
}

pub async fn create(
    store: &dyn DocumentStore,
    subscription: &NewsletterSubscription,
) -> Result<(), StoreError> {
    store.insert_one(COLLECTION, to_document(subscription)?).await
}
