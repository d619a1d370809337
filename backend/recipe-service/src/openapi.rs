/// OpenAPI documentation for the Recipe Blog API
use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::handlers::diagnostics::DiagnosticsResponse;
use crate::models::{
    Category, Comment, CreateCategoryRequest, CreateCommentRequest, CreateRecipeRequest,
    CreatedResponse, Recipe, SuggestRequest, SuggestResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Blog API",
        version = "1.0.0",
        description = "Recipes, reader comments and categories for the recipe blog. Also serves the recipe sitemap and rule-based cooking tips.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Liveness and store diagnostics"),
        (name = "recipes", description = "Recipe creation, search and lookup by slug"),
        (name = "comments", description = "Reader comments on recipes"),
        (name = "categories", description = "Recipe categories"),
        (name = "site", description = "Sitemap and cooking-tip suggestions"),
    ),
    components(schemas(
        CreateRecipeRequest,
        Recipe,
        CreateCommentRequest,
        Comment,
        CreateCategoryRequest,
        Category,
        SuggestRequest,
        SuggestResponse,
        CreatedResponse,
        DiagnosticsResponse,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}

/// GET /api/openapi.json
pub async fn openapi_json() -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&ApiDoc::openapi()).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_recipe_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        for name in ["Recipe", "CreateRecipeRequest", "Comment", "Category", "DiagnosticsResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        assert_eq!(doc.info.title, "Recipe Blog API");
    }
}
