/// Recipe service - recipe creation, listing and lookup by slug
use crate::db::recipe_repo::{self, RecipeFilter};
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{CreateRecipeRequest, Recipe};
use std::sync::Arc;
use validator::Validate;

pub struct RecipeService {
    store: Arc<dyn DocumentStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a recipe, returning its new identifier
    pub async fn create_recipe(&self, req: &CreateRecipeRequest) -> Result<String> {
        req.validate()?;

        let id = recipe_repo::insert_recipe(self.store.as_ref(), req).await?;
        metrics::record_created("recipe");
        tracing::info!(recipe_id = %id, slug = %req.resolved_slug(), "recipe created");

        Ok(id.to_hex())
    }

    /// Recipes matching the optional title/tag predicates
    pub async fn list_recipes(&self, filter: &RecipeFilter, limit: i64) -> Result<Vec<Recipe>> {
        recipe_repo::list_recipes(self.store.as_ref(), filter, limit).await
    }

    /// Recipe by exact slug
    pub async fn get_recipe_by_slug(&self, slug: &str) -> Result<Recipe> {
        recipe_repo::find_recipe_by_slug(self.store.as_ref(), slug)
            .await?
            .ok_or_else(AppError::recipe_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn service() -> RecipeService {
        RecipeService::new(Arc::new(MemoryStore::new("test")))
    }

    fn request(title: &str, tags: &[&str]) -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: title.to_string(),
            slug: None,
            summary: Some("A weeknight favourite".into()),
            ingredients: vec!["flour".into(), "butter".into()],
            steps: vec!["Mix".into(), "Bake".into()],
            category: Some("Baking".into()),
            cook_time_minutes: Some(45),
            image_url: None,
            author: Some("Sam".into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn created_recipe_is_found_by_derived_slug() {
        let service = service();
        let id = service
            .create_recipe(&request("Brown Butter  Cookies", &["dessert"]))
            .await
            .unwrap();

        let recipe = service
            .get_recipe_by_slug("brown-butter-cookies")
            .await
            .unwrap();
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.title, "Brown Butter  Cookies");
        assert_eq!(recipe.ingredients, vec!["flour", "butter"]);
        assert_eq!(recipe.category.as_deref(), Some("Baking"));
    }

    #[tokio::test]
    async fn invalid_recipe_is_not_stored() {
        let store = Arc::new(MemoryStore::new("test"));
        let service = RecipeService::new(store.clone());

        let result = service.create_recipe(&request("ab", &[])).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.count("recipe"), 0);
    }

    #[tokio::test]
    async fn missing_slug_is_not_found() {
        let result = service().get_recipe_by_slug("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn listing_filters_by_title_and_tag() {
        let service = service();
        service
            .create_recipe(&request("Lemon Bars", &["dessert", "citrus"]))
            .await
            .unwrap();
        service
            .create_recipe(&request("Lemon Chicken", &["dinner", "citrus"]))
            .await
            .unwrap();
        service
            .create_recipe(&request("Apple Pie", &["dessert"]))
            .await
            .unwrap();

        let lemons = service
            .list_recipes(&RecipeFilter::new(Some("lemon".into()), None), 20)
            .await
            .unwrap();
        assert_eq!(lemons.len(), 2);

        let lemon_desserts = service
            .list_recipes(
                &RecipeFilter::new(Some("LEMON".into()), Some("dessert".into())),
                20,
            )
            .await
            .unwrap();
        assert_eq!(lemon_desserts.len(), 1);
        assert_eq!(lemon_desserts[0].title, "Lemon Bars");

        let capped = service
            .list_recipes(&RecipeFilter::default(), 2)
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);
    }
}
