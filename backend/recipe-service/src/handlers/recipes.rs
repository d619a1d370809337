/// Recipe handlers - HTTP endpoints for recipe operations
use crate::db::recipe_repo::RecipeFilter;
use crate::error::Result;
use crate::models::{CreateRecipeRequest, CreatedResponse};
use crate::services::RecipeService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

/// Query parameters for the recipe listing
#[derive(Debug, Deserialize, Validate)]
pub struct ListRecipesQuery {
    /// Case-insensitive title search
    pub q: Option<String>,
    /// Exact tag
    pub tag: Option<String>,
    #[serde(default = "default_recipe_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
}

fn default_recipe_limit() -> i64 {
    20
}

/// Create a new recipe
/// POST /api/recipes
pub async fn create_recipe(
    state: web::Data<AppState>,
    req: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse> {
    let service = RecipeService::new(state.store()?);
    let id = service.create_recipe(&req).await?;

    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

/// List recipes, optionally filtered by title text and tag
/// GET /api/recipes?q=&tag=&limit=
pub async fn list_recipes(
    state: web::Data<AppState>,
    query: web::Query<ListRecipesQuery>,
) -> Result<HttpResponse> {
    let service = RecipeService::new(state.store()?);
    query.validate()?;

    let query = query.into_inner();
    let filter = RecipeFilter::new(query.q, query.tag);
    let recipes = service.list_recipes(&filter, query.limit).await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// Get a recipe by slug
/// GET /api/recipes/{slug}
pub async fn get_recipe(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse> {
    let service = RecipeService::new(state.store()?);
    let recipe = service.get_recipe_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(recipe))
}
