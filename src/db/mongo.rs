use async_trait::async_trait;
use mongodb::bson::{self, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use super::{Document, DocumentStore, StoreError};

const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed store. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        let database = client.database(db_name);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend)?;

        Ok(Self { database })
    }

    /// Create a unique index on a single field, making the lookup-then-insert
    /// in the newsletter flow safe against concurrent duplicates.
    pub async fn ensure_unique_index(
        &self,
        collection: &str,
        field: &str,
    ) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.database
            .collection::<bson::Document>(collection)
            .create_index(index)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let document = bson::to_document(&document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.database
            .collection::<bson::Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| match *e.kind {
                ErrorKind::Write(WriteFailure::WriteError(ref we)) if we.code == DUPLICATE_KEY => {
                    StoreError::Duplicate(we.message.clone())
                }
                _ => backend(e),
            })?;

        Ok(())
    }

    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let found = self
            .database
            .collection::<bson::Document>(collection)
            .find_one(doc! { field: value })
            .projection(doc! { "_id": 0 })
            .await
            .map_err(backend)?;

        found
            .map(|d| {
                bson::from_document::<Document>(d)
                    .map_err(|e| StoreError::Serialization(e.to_string()))
            })
            .transpose()
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}
