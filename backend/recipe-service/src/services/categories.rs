/// Category service - category creation and listing
use crate::db::{category_repo, DocumentStore};
use crate::error::Result;
use crate::metrics;
use crate::models::{Category, CreateCategoryRequest};
use std::sync::Arc;
use validator::Validate;

pub struct CategoryService {
    store: Arc<dyn DocumentStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create_category(&self, req: &CreateCategoryRequest) -> Result<String> {
        req.validate()?;

        let id = category_repo::insert_category(self.store.as_ref(), req).await?;
        metrics::record_created("category");
        tracing::info!(category_id = %id, name = %req.name, "category created");

        Ok(id.to_hex())
    }

    pub async fn list_categories(&self, limit: i64) -> Result<Vec<Category>> {
        category_repo::list_categories(self.store.as_ref(), limit).await
    }
}
