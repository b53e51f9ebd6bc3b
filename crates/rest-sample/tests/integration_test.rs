use rest_sample::lifecycle::Application;
use rest_sample::model::{Greeting, Item};
use rest_sample::resources::catalog::catalog_of;
use std::sync::Arc;

/// Full end-to-end run through routing, every built-in stage and both writers.
#[tokio::test]
async fn test_full_application_flow() {
    let app = Application::new().expect("Failed to wire application");

    // JSON resource
    let response = app.handle("GET", "/greeting").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    let greeting: Greeting = serde_json::from_slice(&response.body).expect("greeting JSON");
    assert_eq!(greeting, Greeting::for_name("world"));

    // Text resource
    let response = app.handle("GET", "/health").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.body_text(), "ok");

    // Single item
    let response = app.handle("GET", "/items/2").await;
    assert_eq!(response.status, 200);
    let item: Item = serde_json::from_slice(&response.body).expect("item JSON");
    assert_eq!(item, Item::new(2, "Gadget", 99.0));

    // Delete -> no content, then the item is gone
    let response = app.handle("DELETE", "/items/2").await;
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());

    let response = app.handle("GET", "/items/2").await;
    assert_eq!(response.status, 404);
    assert_eq!(response.body_text(), "Not found: item_2");

    // Listing reflects the delete
    let response = app.handle("GET", "/items").await;
    let items: Vec<Item> = serde_json::from_slice(&response.body).expect("list JSON");
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "Gizmo"]);
}

#[tokio::test]
async fn test_error_statuses() {
    let app = Application::new().unwrap();

    let response = app.handle("GET", "/items/abc").await;
    assert_eq!(response.status, 400);
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(
        response.body_text(),
        "Invalid argument: Invalid item id: \"abc\""
    );

    let response = app.handle("POST", "/greeting").await;
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn test_methods_match_case_insensitively() {
    let app = Application::new().unwrap();
    let response = app.handle("get", "/health").await;
    assert_eq!(response.status, 200);
}

/// Many concurrent requests share the same pipelines and writers.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_requests() {
    let catalog = catalog_of((1..=50).map(|i| Item::new(i, format!("item-{i}"), f64::from(i))));
    let app = Arc::new(Application::with_catalog(catalog).unwrap());

    let mut handles = vec![];
    for i in 0..200u32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let id = i % 50 + 1;
            let response = app.handle("GET", &format!("/items/{id}")).await;
            (id, response)
        }));
    }

    for handle in handles {
        let (id, response) = handle.await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        let item: Item = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(item.id.0, id);
    }

    assert_eq!(app.catalog().read().await.len(), 50);
}
