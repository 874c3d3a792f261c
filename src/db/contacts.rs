use crate::models::ContactSubmission;

use super::{DocumentStore, StoreError, to_document};

pub const COLLECTION: &str = "contacts";

pub async fn create(
    store: &dyn DocumentStore,
    submission: &ContactSubmission,
) -> Result<(), StoreError> {
    store.insert_one(COLLECTION, to_document(submission)?).await
}
