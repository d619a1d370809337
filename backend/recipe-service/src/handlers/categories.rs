/// Category handlers
use super::LimitQuery;
use crate::error::Result;
use crate::models::{CreateCategoryRequest, CreatedResponse};
use crate::services::CategoryService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    req: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse> {
    let service = CategoryService::new(state.store()?);
    let id = service.create_category(&req).await?;

    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

/// GET /api/categories?limit=
pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let service = CategoryService::new(state.store()?);
    query.validate()?;

    let categories = service.list_categories(query.limit).await?;

    Ok(HttpResponse::Ok().json(categories))
}
