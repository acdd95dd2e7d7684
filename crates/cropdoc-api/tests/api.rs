//! HTTP tests for the cropdoc router against the built-in catalog.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cropdoc_api::{router, AppState, USER_EMAIL_HEADER};
use cropdoc_catalog::Catalog;
use cropdoc_history::InMemoryHistoryStore;

// ============================================================
// Helpers
// ============================================================

fn app() -> Router {
    let catalog = Catalog::builtin().unwrap();
    let state = AppState::new(catalog, Arc::new(InMemoryHistoryStore::new()));
    router(Arc::new(state), true)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, email: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(USER_EMAIL_HEADER, email)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value, email: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(email) = email {
        builder = builder.header(USER_EMAIL_HEADER, email);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ============================================================
// Service endpoints
// ============================================================

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let (status, body) = send(&app(), get("/api/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Resource not found" }));
}

// ============================================================
// Symptom matching
// ============================================================

#[tokio::test]
async fn match_ranks_diseases_with_wire_fields() {
    let request = post_json(
        "/api/match-symptoms",
        json!({ "symptoms": "My plant has dark brown spots and yellowing leaves" }),
        None,
    );
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let results = body["results"].as_array().unwrap();
    assert_eq!(body["count"], results.len());

    let blight = results
        .iter()
        .find(|r| r["disease_id"] == "early_blight")
        .expect("early blight should match");
    assert_eq!(blight["match_count"], 3);
    assert_eq!(blight["total_symptoms"], 5);
    assert_eq!(blight["match_percentage"], 60);
    assert_eq!(blight["disease"]["name"], "Early Blight");
    assert_eq!(blight["matched_symptoms"].as_array().unwrap().len(), 3);

    let percentages: Vec<u64> = results
        .iter()
        .map(|r| r["match_percentage"].as_u64().unwrap())
        .collect();
    assert!(percentages.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn match_with_only_short_words_is_empty_success() {
    let request = post_json("/api/match-symptoms", json!({ "symptoms": "the" }), None);
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn match_rejects_blank_and_missing_symptoms() {
    let app = app();
    for payload in [json!({ "symptoms": "   " }), json!({})] {
        let (status, body) = send(&app, post_json("/api/match-symptoms", payload, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "symptoms description required");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/match-symptoms")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

// ============================================================
// Identity and history
// ============================================================

#[tokio::test]
async fn registered_match_is_recorded_in_history() {
    let app = app();
    let request = post_json(
        "/api/match-symptoms",
        json!({ "symptoms": "  Wilting Leaves " }),
        Some("Farmer@Example.com"),
    );
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get_as("/api/search-history", "farmer@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["history"][0]["symptoms"], "wilting leaves");
    assert!(body["history"][0]["timestamp"].is_string());

    let (_, body) = send(&app, get("/api/statistics")).await;
    assert_eq!(body["statistics"]["tracked_users"], 1);
}

#[tokio::test]
async fn rejected_match_is_not_recorded() {
    let app = app();
    let request = post_json(
        "/api/match-symptoms",
        json!({ "symptoms": "" }),
        Some("farmer@example.com"),
    );
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get_as("/api/search-history", "farmer@example.com")).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn guest_history_is_forbidden() {
    let app = app();
    let (status, _) = send(
        &app,
        post_json("/api/match-symptoms", json!({ "symptoms": "wilting" }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/api/search-history")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "search history only available for registered users"
    );

    let (_, body) = send(&app, get("/api/statistics")).await;
    assert_eq!(body["statistics"]["tracked_users"], 0);
}

#[tokio::test]
async fn user_info_reflects_header() {
    let app = app();

    let (_, body) = send(&app, get("/api/user-info")).await;
    assert_eq!(body["user"], json!({ "email": null, "is_guest": true }));

    let (_, body) = send(&app, get_as("/api/user-info", " Grower@Farm.org ")).await;
    assert_eq!(
        body["user"],
        json!({ "email": "grower@farm.org", "is_guest": false })
    );
}

// ============================================================
// Catalog browsing
// ============================================================

#[tokio::test]
async fn lists_catalog_in_order() {
    let (status, body) = send(&app(), get("/api/diseases")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 15);
    assert_eq!(body["diseases"][0]["id"], "early_blight");
    assert_eq!(body["diseases"][14]["id"], "alternaria_leaf_spot");
}

#[tokio::test]
async fn gets_single_disease_or_404() {
    let app = app();

    let (status, body) = send(&app, get("/api/disease/late_blight")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["disease"]["severity"], "Very High");

    let (status, body) = send(&app, get("/api/disease/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "disease 'nope' not found");
}

#[tokio::test]
async fn search_matches_names_and_rejects_blank() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json("/api/search-diseases", json!({ "query": "Blight" }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"][0]["id"], "early_blight");
    assert_eq!(body["results"][1]["id"], "late_blight");

    let (status, body) = send(
        &app,
        post_json("/api/search-diseases", json!({ "query": " " }), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "search query required");
}

#[tokio::test]
async fn filters_by_plant() {
    let (status, body) = send(&app(), get("/api/diseases-by-plant/Tomato")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plant"], "tomato");
    assert_eq!(body["count"], 8);
}

#[tokio::test]
async fn statistics_summarize_catalog() {
    let (status, body) = send(&app(), get("/api/statistics")).await;
    assert_eq!(status, StatusCode::OK);

    let stats = &body["statistics"];
    assert_eq!(stats["total_diseases"], 15);
    assert_eq!(stats["severity_distribution"]["High"], 6);
    assert_eq!(stats["severity_distribution"]["Very High"], 3);
    assert_eq!(stats["severity_distribution"]["Moderate to High"], 3);
    assert_eq!(stats["severity_distribution"]["Moderate"], 3);
}
