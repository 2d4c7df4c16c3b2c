use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use rolelink_accounts::bootstrap::Bootstrap;
use rolelink_accounts::router::build_router;

use crate::helpers::{setup_state, sorted};

async fn seeded_server() -> TestServer {
    let state = setup_state().await;
    Bootstrap::from_state(&state).seed().await.unwrap();
    TestServer::new(build_router(state)).unwrap()
}

fn names<'a>(items: &'a Value, field: &str) -> Vec<&'a str> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item[field].as_str().expect("string field"))
        .collect()
}

// ── GET /users/{username} ────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_user2_with_roles() {
    let server = seeded_server().await;
    let response = server.get("/users/user2").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["username"], "user2");
    assert_eq!(sorted(names(&body["roles"], "name")), vec!["ADMIN", "USER"]);
    assert!(body["id"].as_str().is_some());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let server = seeded_server().await;
    let response = server.get("/users/nouser").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["kind"], "USER_NOT_FOUND");
    assert_eq!(body["message"], "user not found");
}

// ── GET /roles/{role_name} ───────────────────────────────────────────────────

#[tokio::test]
async fn should_return_role_with_its_users() {
    let server = seeded_server().await;
    let response = server.get("/roles/USER").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "USER");
    assert_eq!(
        sorted(names(&body["users"], "username")),
        vec!["user1", "user2"]
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_role() {
    let server = seeded_server().await;
    let response = server.get("/roles/GHOST").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "ROLE_NOT_FOUND");
}

// ── health / middleware ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_checks() {
    let server = seeded_server().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_echo_request_id_header() {
    let server = seeded_server().await;
    let response = server.get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(!id.is_empty());
}
