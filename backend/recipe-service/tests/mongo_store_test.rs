//! Integration Tests: MongoDB store
//!
//! Runs the repositories against a real MongoDB started with testcontainers.
//! Needs a local Docker daemon:
//!
//! ```text
//! cargo test -p recipe-service --test mongo_store_test -- --ignored
//! ```

use mongodb::bson::doc;
use recipe_service::db::recipe_repo::{self, RecipeFilter};
use recipe_service::db::{DocumentStore, FindOptions, MongoStore, RECIPE_COLLECTION};
use recipe_service::models::CreateRecipeRequest;
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};

async fn start_mongo() -> (ContainerAsync<GenericImage>, String) {
    let image = GenericImage::new("mongo", "7")
        .with_exposed_port(27017)
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"));

    let container = image.start().await;
    let port = container.get_host_port_ipv4(27017).await;
    let url = format!("mongodb://127.0.0.1:{}", port);
    (container, url)
}

fn recipe(title: &str, tags: &[&str]) -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: title.to_string(),
        slug: None,
        summary: None,
        ingredients: vec!["water".to_string()],
        steps: vec!["boil".to_string()],
        category: Some("Soups".to_string()),
        cook_time_minutes: Some(20),
        image_url: None,
        author: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn repositories_round_trip_through_mongo() {
    let (_container, url) = start_mongo().await;
    let store = MongoStore::connect(&url, "recipe_blog_test")
        .await
        .expect("client options");

    let id = recipe_repo::insert_recipe(&store, &recipe("Miso Soup", &["japanese"]))
        .await
        .expect("insert recipe");
    recipe_repo::insert_recipe(&store, &recipe("Tomato Soup", &["classic"]))
        .await
        .expect("insert recipe");

    let found = recipe_repo::find_recipe_by_slug(&store, "miso-soup")
        .await
        .expect("find by slug")
        .expect("recipe present");
    assert_eq!(found.id, id.to_hex());
    assert_eq!(found.cook_time_minutes, Some(20));
    assert!(found.created_at.is_some());

    let filter = RecipeFilter::new(Some("SOUP".to_string()), Some("classic".to_string()));
    let listed = recipe_repo::list_recipes(&store, &filter, 20)
        .await
        .expect("list recipes");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Tomato Soup");

    assert!(recipe_repo::recipe_exists(&store, id).await.expect("exists"));

    let slugs = recipe_repo::list_recipe_slugs(&store, 500)
        .await
        .expect("slugs");
    assert_eq!(slugs.len(), 2);

    let projected = store
        .find_many(
            RECIPE_COLLECTION,
            doc! {},
            FindOptions::limit(1).with_projection(doc! { "slug": 1 }),
        )
        .await
        .expect("projection");
    assert_eq!(projected.len(), 1);
    assert!(!projected[0].contains_key("title"));

    let collections = store.list_collection_names().await.expect("collections");
    assert!(collections.contains(&RECIPE_COLLECTION.to_string()));
}
