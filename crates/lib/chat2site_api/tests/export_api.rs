//! Integration tests: rendered pages, downloads and share links.

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{app, send, token};

async fn restaurant_project(app: &axum::Router, token: &str) -> String {
    let resp = send(app, "POST", "/chat", Some(token), Some(json!({ "message": "restaurant" }))).await;
    assert_eq!(resp.status, StatusCode::OK);
    resp.json()["project_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn preview_renders_html_in_requested_language() {
    let app = app();
    let token = token();
    let id = restaurant_project(&app, &token).await;

    let resp = send(&app, "GET", &format!("/projects/{id}/preview?language=ar"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = resp.text();
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(html.contains("Gourmet Restaurant"));

    let resp = send(&app, "GET", &format!("/projects/{id}/preview?language=xx"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_is_an_attachment_named_after_the_title() {
    let app = app();
    let token = token();
    let id = restaurant_project(&app, &token).await;

    let resp = send(&app, "GET", &format!("/projects/{id}/export"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    let disposition = resp.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("gourmet-restaurant.html"));
    let html = resp.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("#dc2626"));
}

#[tokio::test]
async fn exported_titles_are_escaped() {
    let app = app();
    let token = token();
    let id = restaurant_project(&app, &token).await;

    let mut preview = send(&app, "GET", &format!("/projects/{id}"), Some(&token), None)
        .await
        .json()["preview_data"]
        .clone();
    preview["title"] = json!("<script>x</script>");
    let resp = send(
        &app,
        "PATCH",
        &format!("/projects/{id}"),
        Some(&token),
        Some(json!({ "preview_data": preview })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);

    let html = send(&app, "GET", &format!("/projects/{id}/export"), Some(&token), None)
        .await
        .text();
    assert!(html.contains("&lt;script&gt;x"));
    assert!(!html.contains("<script>x</script>"));
}

#[tokio::test]
async fn share_links_expose_the_page_publicly() {
    let app = app();
    let token = token();
    let id = restaurant_project(&app, &token).await;

    let resp = send(&app, "POST", &format!("/projects/{id}/shares"), Some(&token), Some(json!({}))).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let share = resp.json();
    let share_token = share["share_token"].as_str().unwrap().to_string();
    assert_eq!(share["is_public"], true);
    assert_eq!(share["view_count"], 0);

    let resp = send(&app, "GET", &format!("/share/{share_token}"), None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    let snapshot = resp.json();
    assert_eq!(snapshot["title"], "Gourmet Restaurant");
    assert!(snapshot.get("chat_history").is_none());
    assert!(snapshot.get("user_id").is_none());

    let resp = send(&app, "GET", &format!("/share/{share_token}/html"), None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.text().contains("Gourmet Restaurant"));

    let resp = send(&app, "GET", &format!("/projects/{id}/shares"), Some(&token), None).await;
    let items = resp.json()["items"].as_array().unwrap().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["view_count"], 2);

    let share_id = share["id"].as_str().unwrap();
    let resp = send(&app, "DELETE", &format!("/shares/{share_id}"), Some(&token), None).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", &format!("/share/{share_token}"), None, None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn private_shares_do_not_resolve() {
    let app = app();
    let token = token();
    let id = restaurant_project(&app, &token).await;

    let resp = send(
        &app,
        "POST",
        &format!("/projects/{id}/shares"),
        Some(&token),
        Some(json!({ "is_public": false })),
    )
    .await;
    let share_token = resp.json()["share_token"].as_str().unwrap().to_string();

    let resp = send(&app, "GET", &format!("/share/{share_token}"), None, None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
