//! HTTP-level integration tests for the public intake endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_persists_submission(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contact",
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "company": "Analytical Engines",
            "project_type": "web-design",
            "budget": "10k-25k",
            "message": "We need a new site.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().len() > 0);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["email"], "ada@example.com");
    assert_eq!(json["data"][0]["project_type"], "web-design");
    assert_eq!(json["data"][0]["status"], "NEW");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_rejects_missing_message(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contact",
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "project_type": "web-design",
            "message": "",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("message"));

    // Nothing was stored.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(json["pagination"]["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_rejects_absent_message_field(pool: PgPool) {
    // No `message` key at all, as opposed to an empty one.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contact",
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "project_type": "web-design",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(json["pagination"]["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_newsletter_rejects_absent_email_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/newsletter", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_form_rejects_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contact",
        serde_json::json!({
            "name": "Ada",
            "email": "not-an-email",
            "project_type": "web-design",
            "message": "Hi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_newsletter_accepts_valid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/newsletter",
        serde_json::json!({"email": "reader@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_newsletter_rejects_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/newsletter",
        serde_json::json!({"email": "nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
