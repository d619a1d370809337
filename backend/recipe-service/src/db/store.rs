use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use thiserror::Error;

/// Collection holding recipes
pub const RECIPE_COLLECTION: &str = "recipe";
/// Collection holding comments
pub const COMMENT_COLLECTION: &str = "comment";
/// Collection holding categories
pub const CATEGORY_COLLECTION: &str = "category";

/// Errors raised by a document store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach or configure the store
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected or failed an operation
    #[error("Execution error: {0}")]
    Execution(String),

    /// The store returned an identifier that is not an ObjectId
    #[error("Unexpected identifier returned by store: {0}")]
    UnexpectedId(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Options for a bounded multi-document read
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Maximum number of documents returned
    pub limit: i64,
    /// Fields to fetch (`{field: 1}`); `None` fetches whole documents
    pub projection: Option<Document>,
}

impl FindOptions {
    pub fn limit(limit: i64) -> Self {
        Self {
            limit,
            projection: None,
        }
    }

    pub fn with_projection(mut self, projection: Document) -> Self {
        self.projection = Some(projection);
        self
    }
}

/// Collection-level operations the service needs from a document database.
///
/// Filters use the MongoDB query language subset: plain equality,
/// `$in` and `$regex` with `$options`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this handle operates on
    fn database_name(&self) -> &str;

    /// Insert a document; the store assigns `_id`
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// First document matching `filter`
    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    /// Documents matching `filter`, natural store order, bounded by `options.limit`
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> StoreResult<Vec<Document>>;

    /// Names of the collections in the database
    async fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}
