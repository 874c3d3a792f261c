pub mod contacts;
pub mod memory;
pub mod mongo;
pub mod newsletter;

use async_trait::async_trait;
use serde::Serialize;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A flat, schema-less document as handed to and returned from a store.
pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Debug)]
pub enum StoreError {
    /// The write was rejected by a unique index.
    Duplicate(String),
    Backend(String),
    Serialization(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Duplicate(msg) => write!(f, "Duplicate key: {msg}"),
            StoreError::Backend(msg) => write!(f, "Store backend error: {msg}"),
            StoreError::Serialization(msg) => write!(f, "Document serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Collection-addressed persistence used by the request handlers.
///
/// Implementations must be safe to share between concurrently running
/// requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    /// First document in `collection` whose `field` equals `value`, if any.
    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError>;
}

pub(crate) fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}
