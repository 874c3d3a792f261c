use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Document, DocumentStore, StoreError};

/// In-process store backing the test suite.
///
/// Optionally enforces uniqueness on `(collection, field)` pairs the same way
/// a MongoDB unique index would.
#[derive(Default)]
pub struct MemoryStore {
    /// collection name -> documents in insertion order
    collections: DashMap<String, Vec<Document>>,
    unique: HashSet<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unique(mut self, collection: &str, field: &str) -> Self {
        self.unique.insert((collection.to_string(), field.to_string()));
        self
    }

    /// Snapshot of every document in a collection, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        // The entry guard holds the shard lock, so check and push are atomic.
        let mut docs = self.collections.entry(collection.to_string()).or_default();

        for (coll, field) in &self.unique {
            if coll != collection {
                continue;
            }
            if let Some(value) = document.get(field) {
                if docs.iter().any(|d| d.get(field) == Some(value)) {
                    return Err(StoreError::Duplicate(format!(
                        "{collection}.{field} = {value}"
                    )));
                }
            }
        }

        docs.push(document);
        Ok(())
    }

    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|d| d.get(field).and_then(|v| v.as_str()) == Some(value))
                .cloned()
        }))
    }
}
