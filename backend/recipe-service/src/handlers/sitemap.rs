use crate::error::Result;
use crate::services::sitemap::build_sitemap;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// GET /sitemap.xml
pub async fn sitemap(state: web::Data<AppState>) -> Result<HttpResponse> {
    let store = state.store()?;
    let xml = build_sitemap(store.as_ref(), &state.frontend_url).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .body(xml))
}
