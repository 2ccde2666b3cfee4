//! Integration tests for service ordering: append-on-create, single-step
//! moves, and dense renumbering after deletes.

use sqlx::PgPool;

use atelier_db::models::service::{CreateService, MoveDirection};
use atelier_db::repositories::ServiceRepo;

fn new_service(title: &str) -> CreateService {
    CreateService {
        title: title.to_string(),
        slug: None,
        description: "What we do".to_string(),
        icon: "sparkle".to_string(),
    }
}

async fn seed_three(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::new();
    for (title, slug) in [("Alpha", "alpha"), ("Beta", "beta"), ("Gamma", "gamma")] {
        let s = ServiceRepo::create(pool, &new_service(title), slug)
            .await
            .unwrap();
        ids.push(s.id);
    }
    ids
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_appends_to_end_of_order(pool: PgPool) {
    seed_three(&pool).await;

    let list = ServiceRepo::list(&pool).await.unwrap();
    let orders: Vec<i32> = list.iter().map(|s| s.sort_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(list[0].title, "Alpha");
    assert_eq!(list[2].title, "Gamma");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn move_up_swaps_and_renumbers_densely(pool: PgPool) {
    let ids = seed_three(&pool).await;

    // Move Gamma (position 3) up one step.
    let list = ServiceRepo::move_in_direction(&pool, ids[2], MoveDirection::Up)
        .await
        .unwrap()
        .unwrap();

    let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma", "Beta"]);
    let orders: Vec<i32> = list.iter().map(|s| s.sort_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn move_past_the_edge_is_a_noop(pool: PgPool) {
    let ids = seed_three(&pool).await;

    let list = ServiceRepo::move_in_direction(&pool, ids[0], MoveDirection::Up)
        .await
        .unwrap()
        .unwrap();
    let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);

    let list = ServiceRepo::move_in_direction(&pool, ids[2], MoveDirection::Down)
        .await
        .unwrap()
        .unwrap();
    let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn move_unknown_service_returns_none(pool: PgPool) {
    seed_three(&pool).await;

    let result = ServiceRepo::move_in_direction(&pool, 999_999, MoveDirection::Up)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_renumbers_survivors(pool: PgPool) {
    let ids = seed_three(&pool).await;

    assert!(ServiceRepo::delete(&pool, ids[1]).await.unwrap());

    let list = ServiceRepo::list(&pool).await.unwrap();
    let orders: Vec<i32> = list.iter().map(|s| s.sort_order).collect();
    assert_eq!(orders, vec![1, 2]);
    let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_delete_renumbers_survivors(pool: PgPool) {
    let ids = seed_three(&pool).await;

    let affected = ServiceRepo::bulk_delete(&pool, &[ids[0], ids[2]]).await.unwrap();
    assert_eq!(affected, 2);

    let list = ServiceRepo::list(&pool).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].sort_order, 1);
    assert_eq!(list[0].title, "Beta");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_service_slug_is_rejected(pool: PgPool) {
    ServiceRepo::create(&pool, &new_service("One"), "shared")
        .await
        .unwrap();
    let err = ServiceRepo::create(&pool, &new_service("Two"), "shared")
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_services_slug"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}
