use mongodb::bson::{self, oid::ObjectId, Document};

use super::store::{DocumentStore, FindOptions, CATEGORY_COLLECTION};
use crate::error::{AppError, Result};
use crate::models::{Category, CreateCategoryRequest};
use crate::serialization::flatten_ids;

pub async fn insert_category(
    store: &dyn DocumentStore,
    req: &CreateCategoryRequest,
) -> Result<ObjectId> {
    let id = store
        .insert_one(CATEGORY_COLLECTION, req.to_document(bson::DateTime::now()))
        .await?;
    Ok(id)
}

pub async fn list_categories(store: &dyn DocumentStore, limit: i64) -> Result<Vec<Category>> {
    let documents = store
        .find_many(CATEGORY_COLLECTION, Document::new(), FindOptions::limit(limit))
        .await?;

    documents
        .into_iter()
        .map(|doc| Category::from_document(&flatten_ids(doc)).map_err(AppError::from))
        .collect()
}
