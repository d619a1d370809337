//! HTTP tests for recipe creation, search and lookup.

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use common::{memory_state, recipe_body};
use recipe_service::db::RECIPE_COLLECTION;
use serde_json::{json, Value};

#[actix_web::test]
async fn create_then_fetch_by_derived_slug() {
    let (store, state) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/recipes")
        .set_json(recipe_body("Spicy Tomato Soup"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);
    assert_eq!(store.count(RECIPE_COLLECTION), 1);

    let req = test::TestRequest::get()
        .uri("/api/recipes/spicy-tomato-soup")
        .to_request();
    let recipe: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recipe["id"], json!(id));
    assert_eq!(recipe["title"], "Spicy Tomato Soup");
    assert_eq!(recipe["slug"], "spicy-tomato-soup");
    assert_eq!(recipe["ingredients"], json!(["2 eggs", "1 cup flour"]));
    assert_eq!(recipe["category"], Value::Null);
    assert!(recipe.get("_id").is_none());
    assert!(recipe["created_at"].is_string());
}

#[actix_web::test]
async fn explicit_slug_is_kept() {
    let (_store, state) = memory_state();
    let app = init_app!(state);

    let mut body = recipe_body("Grandma's Pie");
    body["slug"] = json!("grandmas-pie");
    let req = test::TestRequest::post()
        .uri("/api/recipes")
        .set_json(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/recipes/grandmas-pie")
        .to_request();
    let recipe: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recipe["title"], "Grandma's Pie");
}

#[actix_web::test]
async fn unknown_slug_is_404() {
    let (_store, state) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/recipes/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Recipe not found");
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn invalid_payloads_are_422() {
    let (store, state) = memory_state();
    let app = init_app!(state);

    for body in [
        json!({ "title": "ab" }),
        json!({ "title": "Stew", "cook_time_minutes": 1001 }),
        json!({ "title": "Stew", "image_url": "not a url" }),
        json!({ "title": "Stew", "slug": "has spaces" }),
        json!({ "summary": "no title" }),
        json!({ "title": "Stew", "tags": "dinner" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/recipes")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    }
    assert_eq!(store.count(RECIPE_COLLECTION), 0);
}

#[actix_web::test]
async fn list_filters_by_title_and_tag() {
    let (_store, state) = memory_state();
    let app = init_app!(state);

    for (title, tag) in [
        ("Lemon Tart", "dessert"),
        ("Lemon Chicken", "dinner"),
        ("Garlic Bread", "side"),
    ] {
        let mut body = recipe_body(title);
        body["tags"] = json!([tag]);
        let req = test::TestRequest::post()
            .uri("/api/recipes")
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/recipes").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/recipes?q=LEMON")
        .to_request();
    let lemons: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(lemons.len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/recipes?q=lemon&tag=dinner")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Lemon Chicken");

    let req = test::TestRequest::get()
        .uri("/api/recipes?tag=Dinner")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(found.is_empty());

    let req = test::TestRequest::get()
        .uri("/api/recipes?limit=1")
        .to_request();
    let limited: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(limited.len(), 1);
}

#[actix_web::test]
async fn search_text_is_literal() {
    let (_store, state) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/recipes")
        .set_json(recipe_body("Garlic Bread"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/recipes?q=.*")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(found.is_empty());
}

#[actix_web::test]
async fn list_limit_out_of_range_is_422() {
    let (_store, state) = memory_state();
    let app = init_app!(state);

    for uri in [
        "/api/recipes?limit=0",
        "/api/recipes?limit=101",
        "/api/recipes?limit=many",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}
