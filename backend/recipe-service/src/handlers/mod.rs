/// HTTP handlers for recipe-service endpoints
///
/// - Recipes: create, filtered list, fetch by slug
/// - Comments: add to a recipe, list for a recipe
/// - Categories: create, list
/// - Site: sitemap, cooking-tip suggestions, liveness and diagnostics
pub mod categories;
pub mod comments;
pub mod diagnostics;
pub mod recipes;
pub mod sitemap;
pub mod suggestions;

use crate::error::AppError;
use crate::metrics;
use crate::openapi;
use actix_web::web;
use serde::Deserialize;
use validator::Validate;

/// `limit` query parameter for comment and category listings
#[derive(Debug, Deserialize, Validate)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 200))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Extractor failures become 422 responses in the service's error format
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
}

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    cfg.route("/", web::get().to(diagnostics::root))
        .route("/test", web::get().to(diagnostics::test_database))
        .route("/health", web::get().to(diagnostics::health))
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .route("/sitemap.xml", web::get().to(sitemap::sitemap))
        .service(
            web::scope("/api")
                .route("/openapi.json", web::get().to(openapi::openapi_json))
                .route("/ai/suggest", web::post().to(suggestions::suggest))
                .service(
                    web::resource("/recipes")
                        .route(web::post().to(recipes::create_recipe))
                        .route(web::get().to(recipes::list_recipes)),
                )
                .service(
                    web::resource("/recipes/{recipe_id}/comments")
                        .route(web::post().to(comments::create_comment))
                        .route(web::get().to(comments::list_comments)),
                )
                .service(
                    web::resource("/recipes/{slug}").route(web::get().to(recipes::get_recipe)),
                )
                .service(
                    web::resource("/categories")
                        .route(web::post().to(categories::create_category))
                        .route(web::get().to(categories::list_categories)),
                ),
        );
}
