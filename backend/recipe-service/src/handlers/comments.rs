/// Comment handlers - HTTP endpoints for recipe comments
use super::LimitQuery;
use crate::error::Result;
use crate::models::{CreateCommentRequest, CreatedResponse};
use crate::services::CommentService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Add a comment to a recipe
/// POST /api/recipes/{recipe_id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    recipe_id: web::Path<String>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.store()?);
    let id = service.create_comment(&recipe_id, &req).await?;

    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

/// List comments for a recipe
/// GET /api/recipes/{recipe_id}/comments?limit=
pub async fn list_comments(
    state: web::Data<AppState>,
    recipe_id: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.store()?);
    query.validate()?;

    let comments = service.list_comments(&recipe_id, query.limit).await?;

    Ok(HttpResponse::Ok().json(comments))
}
