use mongodb::bson::{self, doc, oid::ObjectId};

use super::store::{DocumentStore, FindOptions, COMMENT_COLLECTION};
use crate::error::{AppError, Result};
use crate::models::{Comment, CreateCommentRequest};
use crate::serialization::flatten_ids;

/// Insert a comment for `recipe_id`
pub async fn insert_comment(
    store: &dyn DocumentStore,
    recipe_id: &str,
    req: &CreateCommentRequest,
) -> Result<ObjectId> {
    let id = store
        .insert_one(
            COMMENT_COLLECTION,
            req.to_document(recipe_id, bson::DateTime::now()),
        )
        .await?;
    Ok(id)
}

/// Comments whose recipe_id equals `recipe_id`, at most `limit`
pub async fn list_comments_by_recipe(
    store: &dyn DocumentStore,
    recipe_id: &str,
    limit: i64,
) -> Result<Vec<Comment>> {
    let documents = store
        .find_many(
            COMMENT_COLLECTION,
            doc! { "recipe_id": recipe_id },
            FindOptions::limit(limit),
        )
        .await?;

    documents
        .into_iter()
        .map(|doc| Comment::from_document(&flatten_ids(doc)).map_err(AppError::from))
        .collect()
}
