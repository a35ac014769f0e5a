//! Router tests driven through `tower::ServiceExt::oneshot`

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::domain::{Admin, Permissions};
use crate::repository::open_in_memory;
use crate::{build_router, AppState};

const OWNER: &str = "owner-token";
const CLIENTS_ONLY: &str = "clients-token";

async fn setup() -> Router {
    let state = AppState::new(open_in_memory().unwrap());
    state.admins.upsert_owner("owner@studio.test", OWNER).await.unwrap();
    let editor = Admin::new(
        "clients@studio.test".to_string(),
        CLIENTS_ONLY.to_string(),
        Permissions { manage_clients: true, ..Default::default() },
    );
    state.admins.create(&editor).await.unwrap();
    build_router(state, None)
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

async fn create_client(app: &Router, name: &str) -> u64 {
    let (status, body) = send(app, Method::POST, "/api/clients", Some(OWNER), Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array().unwrap().iter().map(|v| v["name"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let app = setup().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_session_requires_known_token() {
    let app = setup().await;

    let (status, _) = send(&app, Method::GET, "/api/session", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, "/api/session", Some("nope"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/api/session", Some(CLIENTS_ONLY), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permissions"]["manage_clients"], true);
    assert_eq!(body["permissions"]["manage_portfolio"], false);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_order_batch_reorders_clients() {
    let app = setup().await;
    let a = create_client(&app, "A").await;
    let b = create_client(&app, "B").await;
    let c = create_client(&app, "C").await;

    let batch = json!({
        "collection": "clients",
        "writes": [{ "id": c, "order": 0 }, { "id": a, "order": 1 }, { "id": b, "order": 2 }]
    });
    let (status, body) = send(&app, Method::POST, "/api/order-batches", Some(CLIENTS_ONLY), Some(batch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["written"], 3);
    let (_, list) = send(&app, Method::GET, "/api/clients", Some(OWNER), None).await;
    assert_eq!(names(&list), vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_order_batch_without_permission_is_forbidden() {
    let app = setup().await;
    let (_, item) = send(&app, Method::POST, "/api/portfolio", Some(OWNER), Some(json!({ "title": "Work" }))).await;

    let batch = json!({ "collection": "portfolio", "writes": [{ "id": item["id"], "order": 9 }] });
    let (status, _) = send(&app, Method::POST, "/api/order-batches", Some(CLIENTS_ONLY), Some(batch)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let (_, list) = send(&app, Method::GET, "/api/portfolio", Some(OWNER), None).await;
    assert_eq!(list[0]["order"], 0);
}

#[tokio::test]
async fn test_order_batch_with_unknown_id_changes_nothing() {
    let app = setup().await;
    let a = create_client(&app, "A").await;
    let b = create_client(&app, "B").await;

    let batch = json!({
        "collection": "clients",
        "writes": [{ "id": b, "order": 0 }, { "id": a, "order": 1 }, { "id": 777, "order": 2 }]
    });
    let (status, _) = send(&app, Method::POST, "/api/order-batches", Some(OWNER), Some(batch)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, Method::GET, "/api/clients", Some(OWNER), None).await;
    assert_eq!(names(&list), vec!["A", "B"]);
}

#[tokio::test]
async fn test_order_batch_rejects_bad_input() {
    let app = setup().await;
    let a = create_client(&app, "A").await;

    let unknown = json!({ "collection": "settings", "writes": [] });
    let (status, _) = send(&app, Method::POST, "/api/order-batches", Some(OWNER), Some(unknown)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let dup = json!({ "collection": "clients", "writes": [{ "id": a, "order": 0 }, { "id": a, "order": 1 }] });
    let (status, _) = send(&app, Method::POST, "/api/order-batches", Some(OWNER), Some(dup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_portfolio_crud_and_placement() {
    let app = setup().await;

    let (_, first) = send(&app, Method::POST, "/api/portfolio", Some(OWNER), Some(json!({ "title": "First" }))).await;
    let (_, second) = send(&app, Method::POST, "/api/portfolio", Some(OWNER), Some(json!({ "title": "Second" }))).await;
    assert_eq!(first["order"], 0);
    assert_eq!(second["order"], -1);

    let uri = format!("/api/portfolio/{}", first["id"]);
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(OWNER),
        Some(json!({ "title": "First, renamed", "is_visible": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"], 0);
    assert_eq!(updated["is_visible"], false);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(OWNER), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(OWNER), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_editing_needs_collection_permission() {
    let app = setup().await;

    let (status, _) = send(&app, Method::POST, "/api/portfolio", Some(CLIENTS_ONLY), Some(json!({ "title": "Nope" }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::POST, "/api/clients", Some(CLIENTS_ONLY), Some(json!({ "name": "Yes" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, "/api/clients", Some(OWNER), Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_lists_only_visible() {
    let app = setup().await;
    create_client(&app, "Shown").await;
    send(&app, Method::POST, "/api/clients", Some(OWNER), Some(json!({ "name": "Hidden", "is_visible": false }))).await;

    let (status, list) = send(&app, Method::GET, "/api/public/clients", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&list), vec!["Shown"]);
    let (_, portfolio) = send(&app, Method::GET, "/api/public/portfolio", None, None).await;
    assert_eq!(portfolio, json!([]));
}
