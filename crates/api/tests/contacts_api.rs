//! HTTP-level integration tests for the admin `/contacts` endpoints.
//!
//! Submissions are seeded through the public contact form so the whole
//! intake-to-triage path is exercised.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

async fn submit(pool: &PgPool, name: &str, email: &str, message: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contact",
        serde_json::json!({
            "name": name,
            "email": email,
            "project_type": "branding",
            "message": message,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn first_contact_id(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    json["data"][0]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_appears_with_status_new(pool: PgPool) {
    submit(&pool, "Ada", "ada@example.com", "Need a rebrand").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["name"], "Ada");
    assert_eq!(json["data"][0]["status"], "NEW");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_patch_moves_through_lifecycle(pool: PgPool) {
    submit(&pool, "Ada", "ada@example.com", "Need a rebrand").await;
    let id = first_contact_id(&pool).await;

    for status in ["IN_PROGRESS", "COMPLETED", "ARCHIVED"] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(
            patch_json(
                app,
                &format!("/api/v1/contacts/{id}/status"),
                serde_json::json!({"status": status}),
            )
            .await,
        )
        .await;
        assert_eq!(json["data"]["status"], status);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_returns_400(pool: PgPool) {
    submit(&pool, "Ada", "ada@example.com", "Need a rebrand").await;
    let id = first_contact_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/contacts/{id}/status"),
        serde_json::json!({"status": "SPAM"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status_and_search(pool: PgPool) {
    submit(&pool, "Ada", "ada@example.com", "Need a rebrand").await;
    submit(&pool, "Grace", "grace@example.com", "Website refresh").await;
    let id = first_contact_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        &format!("/api/v1/contacts/{id}/status"),
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/contacts?status=NEW").await).await;
    assert_eq!(json["pagination"]["total"], 1);

    // Search spans name, email, company, and message.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts?q=rebrand").await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["name"], "Ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_status_touches_only_listed_ids(pool: PgPool) {
    for i in 0..3 {
        submit(&pool, &format!("Person {i}"), &format!("p{i}@example.com"), "Hello").await;
    }
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/bulk-status",
            serde_json::json!({"ids": [ids[0], ids[1]], "status": "ARCHIVED"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["affected"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts?status=NEW").await).await;
    assert_eq!(json["pagination"]["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_and_bulk_delete(pool: PgPool) {
    for i in 0..3 {
        submit(&pool, &format!("Person {i}"), &format!("p{i}@example.com"), "Hello").await;
    }
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/contacts/{}", ids[0])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/bulk-delete",
            serde_json::json!({"ids": [ids[1], ids[2]]}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["affected"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(json["pagination"]["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_contact_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/contacts/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
