//! Web Surface Test Suite
//!
//! Drives the router in-process to check that the three interaction events
//! (type filter, search, shiny toggle) behave as the page script expects.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use pokedex::web::server::{create_router, MAX_QUERY_LEN};
use pokedex::{Browser, PokedexStore, Pokemon};

fn app() -> Router {
    let store = PokedexStore::from_records(vec![
        Pokemon::new(1, "bulbasaur", "https://sprites.test/1.png")
            .with_shiny("https://sprites.test/shiny/1.png")
            .with_types(["grass", "poison"])
            .with_description("A strange seed was planted on its back at birth."),
        Pokemon::new(4, "charmander", "https://sprites.test/4.png")
            .with_shiny("https://sprites.test/shiny/4.png")
            .with_types(["fire"]),
        Pokemon::new(132, "ditto", "https://sprites.test/132.png").with_types(["normal"]),
    ]);
    create_router(Browser::new(store))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

async fn json(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, method, uri).await;
    (
        status,
        serde_json::from_str(&body).expect("Body is not JSON"),
    )
}

#[tokio::test]
async fn test_index_renders_every_card() {
    let app = app();
    let (status, body) = send(&app, "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id='image-1'"));
    assert!(body.contains("id='image-4'"));
    assert!(body.contains("id='image-132'"));
    assert!(body.contains("<option value='fire'>fire</option>"));
    assert!(body.contains("A strange seed was planted on its back at birth."));
}

#[tokio::test]
async fn test_fragment_type_filter() {
    let app = app();
    let (status, body) = send(&app, "GET", "/fragments/list?type=poison").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("bulbasaur"));
    assert!(!body.contains("charmander"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_fragment_empty_type_clears_filter() {
    let app = app();
    let (_, body) = send(&app, "GET", "/fragments/list?type=").await;
    assert_eq!(body.matches("class='card'").count(), 3);
}

#[tokio::test]
async fn test_api_search_by_name_and_number() {
    let app = app();

    let (status, body) = json(&app, "GET", "/api/pokemon?q=char").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["pokemon"][0]["name"], "charmander");

    let (_, body) = json(&app, "GET", "/api/pokemon?q=4").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["pokemon"][0]["number"], 4);
}

#[tokio::test]
async fn test_api_types() {
    let app = app();
    let (_, body) = json(&app, "GET", "/api/types").await;
    assert_eq!(
        body["types"],
        serde_json::json!(["fire", "grass", "normal", "poison"])
    );
}

#[tokio::test]
async fn test_catalog_export_is_versioned() {
    let app = app();
    let (status, body) = json(&app, "GET", "/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], pokedex::catalog::store::CATALOG_VERSION);
    assert!(body["created_at"].is_string());

    let names: Vec<&str> = body["pokemon"]
        .as_array()
        .expect("pokemon should be an array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["bulbasaur", "charmander", "ditto"]);
}

#[tokio::test]
async fn test_toggle_round_trip() {
    let app = app();

    let (status, body) = json(&app, "POST", "/api/toggle/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image"], "https://sprites.test/shiny/1.png");
    assert_eq!(body["variant"], "alternate");

    let (_, body) = json(&app, "POST", "/api/toggle/1").await;
    assert_eq!(body["image"], "https://sprites.test/1.png");
    assert_eq!(body["variant"], "primary");
}

#[tokio::test]
async fn test_toggle_persists_across_rerender() {
    let app = app();
    send(&app, "POST", "/api/toggle/4").await;

    let (_, body) = send(&app, "GET", "/fragments/list?q=char").await;
    assert!(body.contains("src='https://sprites.test/shiny/4.png'"));

    let (_, body) = json(&app, "GET", "/api/pokemon").await;
    assert_eq!(
        body["pokemon"][1]["displayed_image"],
        "https://sprites.test/shiny/4.png"
    );
}

#[tokio::test]
async fn test_toggle_without_shiny_stays_standard() {
    let app = app();
    for _ in 0..2 {
        let (status, body) = json(&app, "POST", "/api/toggle/132").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["image"], "https://sprites.test/132.png");
    }
}

#[tokio::test]
async fn test_toggle_unknown_number() {
    let app = app();
    let (status, body) = json(&app, "POST", "/api/toggle/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_toggle_rejects_non_numeric() {
    let app = app();
    let (status, _) = send(&app, "POST", "/api/toggle/pikachu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_overlong_query_rejected() {
    let app = app();
    let uri = format!("/api/pokemon?q={}", "a".repeat(MAX_QUERY_LEN + 1));
    let (status, body) = json(&app, "GET", &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "query_too_long");
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        response.headers()["x-content-type-options"],
        "nosniff"
    );
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = app();
    let (status, body) = send(&app, "GET", "/static/js/main.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/toggle/"));

    let (status, _) = send(&app, "GET", "/static/css/styles.css").await;
    assert_eq!(status, StatusCode::OK);
}
