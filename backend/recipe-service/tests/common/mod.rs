//! Shared fixtures for the HTTP test-suites.
#![allow(dead_code)]

use recipe_service::db::MemoryStore;
use recipe_service::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

pub const FRONTEND_URL: &str = "https://recipes.example";

/// Build the full application around `$state`
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(recipe_service::handlers::configure),
        )
        .await
    };
}

/// Fresh in-memory store and the state wrapping it
pub fn memory_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new("recipe_blog_test"));
    let state = AppState::with_store(store.clone(), FRONTEND_URL);
    (store, state)
}

pub fn recipe_body(title: &str) -> Value {
    json!({
        "title": title,
        "summary": "Weeknight favourite",
        "ingredients": ["2 eggs", "1 cup flour"],
        "steps": ["Mix", "Bake"],
        "tags": ["dinner"],
    })
}
