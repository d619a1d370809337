use crate::models::SuggestRequest;
use crate::services::suggestions;
use actix_web::{web, HttpResponse};

/// Rule-based cooking tips; touches no storage
/// POST /api/ai/suggest
pub async fn suggest(req: web::Json<SuggestRequest>) -> HttpResponse {
    HttpResponse::Ok().json(suggestions::suggest(&req))
}
