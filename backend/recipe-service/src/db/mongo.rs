//! MongoDB-backed document store.
//!
//! The driver manages its own connection pool; one [`MongoStore`] is built
//! at startup and shared by every request.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use super::store::{DocumentStore, FindOptions, StoreError, StoreResult};

#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client for `url` bound to database `name`.
    ///
    /// The driver connects lazily, so this only fails on a malformed
    /// connection string.
    pub async fn connect(url: &str, name: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        options.app_name = Some("recipe-service".to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(name);

        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid),
            other => Err(StoreError::UnexpectedId(other.to_string())),
        }
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        self.database
            .collection::<Document>(collection)
            .find_one(filter)
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> StoreResult<Vec<Document>> {
        let mut mongo_options = mongodb::options::FindOptions::default();
        mongo_options.limit = Some(options.limit);
        mongo_options.projection = options.projection;

        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .with_options(mongo_options)
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Execution(e.to_string()))
    }
}
