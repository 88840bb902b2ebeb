// tests/http_api.rs
//! End-to-end behavior of the HTTP surface against an in-memory workspace.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{configured, router_with, send, send_request, FakeNotion, DATABASE_ID, PAGE_ID};
use notion_reviews::{Block, BlockKind, RichText, ServiceConfig};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn scenario_rows() -> FakeNotion {
    FakeNotion::with_rows(json!([{
        "object": "page",
        "id": "p1",
        "created_time": "2024-01-01T00:00:00.000Z",
        "properties": {
            "Status": {"id": "s", "type": "select", "select": {"id": "o1", "name": "Done", "color": "green"}},
            "Tags": {"id": "t", "type": "multi_select", "multi_select": [
                {"id": "o2", "name": "x", "color": "red"},
                {"id": "o3", "name": "y", "color": "blue"}
            ]}
        }
    }]))
}

#[tokio::test]
async fn reviews_are_flattened_in_record_order() {
    let (router, _) = router_with(Arc::new(scenario_rows()), configured());

    let response = send(router, Method::GET, "/api/reviews").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "reviews": [{
                "id": "p1",
                "created_time": "2024-01-01T00:00:00.000Z",
                "properties": [
                    {"name": "Status", "type": "select", "value": "Done"},
                    {"name": "Tags", "type": "multi_select", "value": ["x", "y"]}
                ]
            }]
        })
    );
}

#[tokio::test]
async fn legacy_function_paths_serve_the_same_operations() {
    let (router, _) = router_with(Arc::new(scenario_rows()), configured());
    let modern = send(router.clone(), Method::GET, "/api/reviews").await;
    let legacy = send(router, Method::GET, "/.netlify/functions/getAllReviews").await;

    assert_eq!(legacy.status, StatusCode::OK);
    assert_eq!(legacy.json(), modern.json());
}

#[tokio::test]
async fn categories_are_a_bare_array() {
    let fake = FakeNotion::with_schema(json!({
        "object": "database",
        "id": DATABASE_ID,
        "properties": {
            "Name": {"id": "title", "type": "title", "title": {}},
            "Status": {"id": "s", "type": "select", "select": {"options": [
                {"id": "o1", "name": "Done", "color": "green"}
            ]}},
            "Tags": {"id": "t", "type": "multi_select", "multi_select": {"options": [
                {"id": "o2", "name": "x", "color": "red"}
            ]}}
        }
    }));
    let (router, _) = router_with(Arc::new(fake), configured());

    let response = send(router, Method::GET, "/.netlify/functions/getCategories").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            {"name": "Status", "type": "select", "options": [{"name": "Done", "color": "green", "id": "o1"}]},
            {"name": "Tags", "type": "multi_select", "options": [{"name": "x", "color": "red", "id": "o2"}]}
        ])
    );
}

#[tokio::test]
async fn review_markdown_is_wrapped_in_an_envelope() {
    let mut fake = FakeNotion::default();
    fake.blocks.insert(
        PAGE_ID.to_string(),
        vec![
            Block::new(
                "b1",
                BlockKind::Heading {
                    level: 2,
                    text: vec![RichText::plain("Verdict")],
                },
            ),
            Block::new("b2", BlockKind::Paragraph(vec![RichText::plain("Worth it.")])),
        ],
    );
    let (router, _) = router_with(Arc::new(fake), configured());

    // Hyphenated IDs are accepted and normalized.
    let response = send(
        router,
        Method::GET,
        "/api/review?pageId=59833787-2cf9-4fdf-8782-e53db20768a5",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"review": "## Verdict\n\nWorth it."}));
}

#[tokio::test]
async fn missing_page_id_is_a_bad_request() {
    let fake = Arc::new(FakeNotion::default());
    let (router, connects) = router_with(fake.clone(), configured());

    let missing = send(router.clone(), Method::GET, "/api/review").await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json(), json!({"error": "Missing pageId query parameter"}));

    let blank = send(router.clone(), Method::GET, "/api/review?pageId=").await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let invalid = send(router, Method::GET, "/api/review?pageId=not-a-page").await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.json(), json!({"error": "Invalid pageId query parameter"}));

    assert_eq!(connects.load(Ordering::SeqCst), 0);
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_configuration_fails_before_any_remote_call() {
    let fake = Arc::new(scenario_rows());
    let uris = [
        "/api/reviews".to_string(),
        "/api/categories".to_string(),
        format!("/api/review?pageId={}", PAGE_ID),
    ];

    for uri in &uris {
        let (router, connects) = router_with(fake.clone(), ServiceConfig::default());
        let response = send(router, Method::GET, uri).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(
            response.json()["error"],
            json!("Missing required environment variables"),
            "{}",
            uri
        );
        assert_eq!(connects.load(Ordering::SeqCst), 0, "{}", uri);
    }
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn database_routes_need_the_database_id_too() {
    let config = ServiceConfig {
        database_id: None,
        ..configured()
    };
    let fake = Arc::new(scenario_rows());
    let (router, _) = router_with(fake.clone(), config);

    let response = send(router, Method::GET, "/api/reviews").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn remote_failures_carry_the_cause() {
    let (router, _) = router_with(
        Arc::new(FakeNotion::unauthorized("API token is invalid.")),
        configured(),
    );

    let response = send(router, Method::GET, "/api/categories").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], json!("Internal server error"));
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("API token is invalid."),
        "unexpected body: {}",
        body
    );
}

#[tokio::test]
async fn only_get_and_options_are_allowed() {
    let (router, _) = router_with(Arc::new(scenario_rows()), configured());

    let post = send(router.clone(), Method::POST, "/api/reviews").await;
    assert_eq!(post.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(post.json(), json!({"error": "Method not allowed"}));

    let delete = send(router.clone(), Method::DELETE, "/.netlify/functions/getMarkdownFromReview").await;
    assert_eq!(delete.status, StatusCode::METHOD_NOT_ALLOWED);

    let options = send(router, Method::OPTIONS, "/api/reviews").await;
    assert_eq!(options.status, StatusCode::OK);
    assert_eq!(options.body, "");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let (router, _) = router_with(Arc::new(scenario_rows()), configured());

    let response = send_request(
        router.clone(),
        Request::builder()
            .method(Method::GET)
            .uri("/api/reviews")
            .header(header::ORIGIN, "https://reviews.example")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let preflight = send_request(
        router,
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/categories")
            .header(header::ORIGIN, "https://reviews.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(preflight.status, StatusCode::OK);
    let methods = preflight
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("GET") && methods.contains("OPTIONS"), "{}", methods);
}

#[tokio::test]
async fn health_check_answers_without_configuration() {
    let (router, _) = router_with(Arc::new(FakeNotion::default()), ServiceConfig::default());
    let response = send(router, Method::GET, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"status": "ok"}));
}
