//! Integration tests for contact submissions: intake defaults, status
//! lifecycle, filtering, and bulk triage operations.

use sqlx::PgPool;

use atelier_core::contact_status::ContactStatus;
use atelier_db::models::contact::{ContactFilter, CreateContact};
use atelier_db::repositories::ContactRepo;

fn submission(name: &str, email: &str, message: &str) -> CreateContact {
    CreateContact {
        name: name.to_string(),
        email: email.to_string(),
        company: None,
        project_type: Some("Branding".to_string()),
        budget: None,
        message: message.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_submissions_start_in_new_status(pool: PgPool) {
    let contact = ContactRepo::create(&pool, &submission("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();
    assert_eq!(contact.status, "NEW");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_round_trips(pool: PgPool) {
    let contact = ContactRepo::create(&pool, &submission("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    let updated = ContactRepo::update_status(&pool, contact.id, ContactStatus::InProgress)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "IN_PROGRESS");

    let missing = ContactRepo::update_status(&pool, 999_999, ContactStatus::Archived)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_status_and_search(pool: PgPool) {
    let a = ContactRepo::create(&pool, &submission("Ada", "ada@example.com", "Rebrand work"))
        .await
        .unwrap();
    ContactRepo::create(&pool, &submission("Grace", "grace@example.com", "Web project"))
        .await
        .unwrap();

    ContactRepo::update_status(&pool, a.id, ContactStatus::Completed)
        .await
        .unwrap();

    let filter = ContactFilter {
        status: Some(ContactStatus::Completed),
        search: None,
    };
    let page = ContactRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Ada");

    // Case-insensitive substring over message text.
    let filter = ContactFilter {
        status: None,
        search: Some("REBRAND".to_string()),
    };
    let page = ContactRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_status_touches_exactly_the_listed_ids(pool: PgPool) {
    let a = ContactRepo::create(&pool, &submission("A", "a@example.com", "one"))
        .await
        .unwrap();
    let b = ContactRepo::create(&pool, &submission("B", "b@example.com", "two"))
        .await
        .unwrap();
    let c = ContactRepo::create(&pool, &submission("C", "c@example.com", "three"))
        .await
        .unwrap();

    let affected =
        ContactRepo::bulk_update_status(&pool, &[a.id, c.id], ContactStatus::Archived)
            .await
            .unwrap();
    assert_eq!(affected, 2);

    let untouched = ContactRepo::find_by_id(&pool, b.id).await.unwrap().unwrap();
    assert_eq!(untouched.status, "NEW");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_delete_reports_affected_rows(pool: PgPool) {
    let a = ContactRepo::create(&pool, &submission("A", "a@example.com", "one"))
        .await
        .unwrap();
    let b = ContactRepo::create(&pool, &submission("B", "b@example.com", "two"))
        .await
        .unwrap();

    // Unknown ids are simply not counted.
    let affected = ContactRepo::bulk_delete(&pool, &[a.id, b.id, 999_999])
        .await
        .unwrap();
    assert_eq!(affected, 2);

    let page = ContactRepo::list(&pool, &ContactFilter::default(), 10, 0)
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}
