use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};

use super::store::{DocumentStore, FindOptions, RECIPE_COLLECTION};
use crate::error::{AppError, Result};
use crate::models::{CreateRecipeRequest, Recipe};
use crate::serialization::flatten_ids;

/// Optional listing predicates; both present means both must hold
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the title
    pub q: Option<String>,
    /// Exact tag
    pub tag: Option<String>,
}

impl RecipeFilter {
    pub fn new(q: Option<String>, tag: Option<String>) -> Self {
        Self {
            q: q.filter(|q| !q.is_empty()),
            tag: tag.filter(|tag| !tag.is_empty()),
        }
    }

    /// Store query for this filter. The search text is escaped so it is
    /// matched literally.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(q) = &self.q {
            filter.insert(
                "title",
                doc! { "$regex": regex::escape(q), "$options": "i" },
            );
        }
        if let Some(tag) = &self.tag {
            filter.insert("tags", doc! { "$in": [tag.clone()] });
        }
        filter
    }
}

/// Insert a recipe, deriving its slug when needed
pub async fn insert_recipe(store: &dyn DocumentStore, req: &CreateRecipeRequest) -> Result<ObjectId> {
    let id = store
        .insert_one(RECIPE_COLLECTION, req.to_document(bson::DateTime::now()))
        .await?;
    Ok(id)
}

/// Recipes matching `filter`, at most `limit`
pub async fn list_recipes(
    store: &dyn DocumentStore,
    filter: &RecipeFilter,
    limit: i64,
) -> Result<Vec<Recipe>> {
    let documents = store
        .find_many(RECIPE_COLLECTION, filter.to_document(), FindOptions::limit(limit))
        .await?;

    documents
        .into_iter()
        .map(|doc| Recipe::from_document(&flatten_ids(doc)).map_err(AppError::from))
        .collect()
}

/// First recipe whose slug equals `slug`
pub async fn find_recipe_by_slug(store: &dyn DocumentStore, slug: &str) -> Result<Option<Recipe>> {
    let document = store
        .find_one(RECIPE_COLLECTION, doc! { "slug": slug })
        .await?;

    match document {
        Some(doc) => Ok(Some(Recipe::from_document(&flatten_ids(doc))?)),
        None => Ok(None),
    }
}

/// Whether a recipe with this identifier currently exists
pub async fn recipe_exists(store: &dyn DocumentStore, id: ObjectId) -> Result<bool> {
    let document = store
        .find_one(RECIPE_COLLECTION, doc! { "_id": id })
        .await?;
    Ok(document.is_some())
}

/// Slugs of up to `limit` recipes; only the slug field is fetched.
/// Documents without a string slug are skipped.
pub async fn list_recipe_slugs(store: &dyn DocumentStore, limit: i64) -> Result<Vec<String>> {
    let documents = store
        .find_many(
            RECIPE_COLLECTION,
            Document::new(),
            FindOptions::limit(limit).with_projection(doc! { "slug": 1 }),
        )
        .await?;

    Ok(documents
        .into_iter()
        .filter_map(|doc| match doc.get("slug") {
            Some(Bson::String(slug)) => Some(slug.clone()),
            _ => None,
        })
        .collect())
}
