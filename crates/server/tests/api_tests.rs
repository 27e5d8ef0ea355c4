//! In-process API tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{fixtures, TestFixture};

fn queries(body: &serde_json::Value) -> Vec<String> {
    body["title_variants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["query"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_lists_search_settings() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["search"]["default_languages"], json!(["en", "hu"]));
    assert_eq!(response.body["simplifier"]["max_short_subtitle_words"], 4);
    assert_eq!(response.body["metadata_provider"], "static");
}

#[tokio::test]
async fn test_plan_from_body_default_languages() {
    let fixture = TestFixture::new().await;
    let book = serde_json::to_value(fixtures::mistborn()).unwrap();

    let response = fixture.post("/api/v1/plan", json!({ "book": book })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["languages"], json!(["en", "hu"]));
    assert_eq!(response.body["isbn_candidates"], json!(["9780765311788"]));
    assert_eq!(
        queries(&response.body),
        vec![
            "The Final Empire Brandon Sanderson",
            "A végső birodalom Brandon Sanderson"
        ]
    );
    assert_eq!(
        response.body["grouped_title_variants"],
        json!([
            { "title": "The Final Empire", "languages": ["en"] },
            { "title": "A végső birodalom", "languages": ["hu"] }
        ])
    );
}

#[tokio::test]
async fn test_plan_from_body_simplifies_raw_metadata() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post(
            "/api/v1/plan",
            json!({
                "book": {
                    "title": "The Martian (Unabridged)",
                    "authors": ["Weir, Andy"]
                },
                "languages": ["all"]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["languages"], json!(null));
    assert_eq!(queries(&response.body), vec!["The Martian Andy Weir"]);
    assert_eq!(response.body["title_variants"][0]["languages"], json!(null));
}

#[tokio::test]
async fn test_plan_manual_query() {
    let fixture = TestFixture::new().await;
    let book = serde_json::to_value(fixtures::mistborn()).unwrap();

    let response = fixture
        .post(
            "/api/v1/plan",
            json!({ "book": book, "manual_query": "mistborn epub" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["manual_query"], "mistborn epub");
    assert_eq!(response.body["isbn_candidates"], json!([]));
    assert_eq!(queries(&response.body), vec!["mistborn epub"]);
}

#[tokio::test]
async fn test_plan_rejects_missing_book() {
    let fixture = TestFixture::new().await;
    let response = fixture.post("/api/v1/plan", json!({ "languages": ["en"] })).await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_plan_for_catalog_book() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .get(&format!("/api/v1/books/{}/plan?languages=hu,en", fixtures::MISTBORN_ID))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["languages"], json!(["hu", "en"]));
    assert_eq!(
        queries(&response.body),
        vec![
            "A végső birodalom Brandon Sanderson",
            "The Final Empire Brandon Sanderson"
        ]
    );
}

#[tokio::test]
async fn test_plan_for_catalog_book_all_languages() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .get(&format!("/api/v1/books/{}/plan?languages=all", fixtures::CUCKOOS_EGG_ID))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(queries(&response.body), vec!["The Cuckoo's Egg Clifford Stoll"]);
    assert_eq!(
        response.body["isbn_candidates"],
        json!(["9781416507789", "1416507787"])
    );
}

#[tokio::test]
async fn test_plan_for_unknown_book() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/books/nope/plan").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_simplify_title_endpoint() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post(
            "/api/v1/simplify/title",
            json!({ "title": "Mistborn: The Final Empire", "series_name": "Mistborn" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["simplified"], "The Final Empire");

    let response = fixture
        .post(
            "/api/v1/simplify/title",
            json!({ "title": "The Stormlight Archive: Book 1", "subtitle": "Book 1" }),
        )
        .await;
    assert_eq!(response.body["simplified"], json!(null));
}

#[tokio::test]
async fn test_simplify_author_endpoint() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post("/api/v1/simplify/author", json!({ "author": "Martin L. King Jr." }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["simplified"], "Martin King Jr.");

    let response = fixture
        .post("/api/v1/simplify/author", json!({ "author": "Frank Herbert" }))
        .await;
    assert_eq!(response.body["simplified"], json!(null));
}
