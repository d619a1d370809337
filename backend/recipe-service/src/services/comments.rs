/// Comment service - adds comments to existing recipes and lists them
use crate::db::{comment_repo, recipe_repo, DocumentStore};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{Comment, CreateCommentRequest};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use validator::Validate;

pub struct CommentService {
    store: Arc<dyn DocumentStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Add a comment to a recipe.
    ///
    /// Checks run in order: identifier syntax, recipe existence, then the
    /// payload constraints.
    pub async fn create_comment(
        &self,
        recipe_id: &str,
        req: &CreateCommentRequest,
    ) -> Result<String> {
        let oid = ObjectId::parse_str(recipe_id).map_err(|_| AppError::InvalidId)?;

        if !recipe_repo::recipe_exists(self.store.as_ref(), oid).await? {
            return Err(AppError::recipe_not_found());
        }

        req.validate()?;

        let id = comment_repo::insert_comment(self.store.as_ref(), recipe_id, req).await?;
        metrics::record_created("comment");
        tracing::info!(comment_id = %id, %recipe_id, "comment created");

        Ok(id.to_hex())
    }

    /// Comments for a recipe id; unknown ids simply have none
    pub async fn list_comments(&self, recipe_id: &str, limit: i64) -> Result<Vec<Comment>> {
        comment_repo::list_comments_by_recipe(self.store.as_ref(), recipe_id, limit).await
    }
}
