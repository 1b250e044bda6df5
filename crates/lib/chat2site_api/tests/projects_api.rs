//! Integration tests: project CRUD and auth over the in-memory store.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, send, token};

#[tokio::test]
async fn health_reports_storage_backend() {
    let app = app();
    let resp = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    let json = resp.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage"], "memory");
    assert!(json["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn projects_require_a_valid_token() {
    let app = app();
    let resp = send(&app, "GET", "/projects", None, None).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json()["error"], "unauthorized");

    let resp = send(&app, "GET", "/projects", Some("not-a-jwt"), None).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_get_update_delete_project() {
    let app = app();
    let token = token();

    let resp = send(
        &app,
        "POST",
        "/projects",
        Some(&token),
        Some(json!({ "title": "My Cafe", "description": "Coffee" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let created = resp.json();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "draft");
    assert_eq!(created["template_type"], "general");
    assert_eq!(created["preview_data"]["template"], "general");

    let resp = send(&app, "GET", &format!("/projects/{id}"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["title"], "My Cafe");

    let resp = send(
        &app,
        "PATCH",
        &format!("/projects/{id}"),
        Some(&token),
        Some(json!({ "status": "published", "title": "My Coffee Bar" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    let updated = resp.json();
    assert_eq!(updated["status"], "published");
    assert_eq!(updated["title"], "My Coffee Bar");
    assert_eq!(updated["description"], "Coffee");

    let resp = send(&app, "DELETE", &format!("/projects/{id}"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", &format!("/projects/{id}"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"], "not_found");
}

#[tokio::test]
async fn custom_content_is_kept_until_patched_to_null() {
    let app = app();
    let token = token();
    let resp = send(
        &app,
        "POST",
        "/projects",
        Some(&token),
        Some(json!({ "title": "My Cafe" })),
    )
    .await;
    let id = resp.json()["id"].as_str().unwrap().to_string();
    let path = format!("/projects/{id}");

    let resp = send(
        &app,
        "PATCH",
        &path,
        Some(&token),
        Some(json!({ "html_content": "<main>Hi</main>", "css_content": "main {}" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["html_content"], "<main>Hi</main>");

    let resp = send(&app, "PATCH", &path, Some(&token), Some(json!({ "title": "Cafe" }))).await;
    let kept = resp.json();
    assert_eq!(kept["html_content"], "<main>Hi</main>");
    assert_eq!(kept["css_content"], "main {}");

    let resp = send(
        &app,
        "PATCH",
        &path,
        Some(&token),
        Some(json!({ "html_content": null })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    let cleared = resp.json();
    assert!(cleared["html_content"].is_null());
    assert_eq!(cleared["css_content"], "main {}");

    let html = send(&app, "GET", &format!("{path}/preview"), Some(&token), None)
        .await
        .text();
    assert!(html.contains("<!-- Hero Section -->"));
    assert!(!html.contains("<main>Hi</main>"));
}

#[tokio::test]
async fn list_is_scoped_and_most_recent_first() {
    let app = app();
    let alice = token();
    let bob = token();

    for title in ["First", "Second"] {
        let resp = send(&app, "POST", "/projects", Some(&alice), Some(json!({ "title": title }))).await;
        assert_eq!(resp.status, StatusCode::CREATED);
    }

    let resp = send(&app, "GET", "/projects", Some(&alice), None).await;
    let items = resp.json()["items"].as_array().unwrap().clone();
    let titles: Vec<_> = items.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Second", "First"]);

    let resp = send(&app, "GET", "/projects", Some(&bob), None).await;
    assert!(resp.json()["items"].as_array().unwrap().is_empty());

    let id = items[0]["id"].as_str().unwrap();
    let resp = send(&app, "GET", &format!("/projects/{id}"), Some(&bob), None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_validation_errors() {
    let app = app();
    let token = token();

    let resp = send(&app, "POST", "/projects", Some(&token), Some(json!({ "title": "  " }))).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"], "validation_error");

    let resp = send(&app, "POST", "/projects", Some(&token), Some(json!({ "description": "x" }))).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = send(
        &app,
        "POST",
        "/projects",
        Some(&token),
        Some(json!({ "title": "x", "status": "deleted" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = send(&app, "GET", "/projects/not-a-uuid", Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
