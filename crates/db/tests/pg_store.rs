//! `PgStore` tests against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`.

use assert_matches::assert_matches;
use inventory_db::models::inventory::CreateInventory;
use inventory_db::models::localization::CreateLocalization;
use inventory_db::models::project::CreateProject;
use inventory_db::{EntityStore, PgStore, StoreError};
use sqlx::PgPool;

fn acme() -> CreateProject {
    CreateProject {
        name: Some("Acme".into()),
        company_name: Some("Acme Inc".into()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL DATABASE_URL"]
async fn create_project_writes_owner_link(pool: PgPool) {
    let store = PgStore::new(pool);
    let project = store.create_project(&acme(), 7).await.unwrap();

    let members = store.list_project_members(project.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, 7);
    assert_eq!(members[0].role, "OW");

    let listed = store.list_projects_for_user(7).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(store.list_projects_for_user(8).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL DATABASE_URL"]
async fn missing_column_is_a_constraint_error(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let input = CreateProject {
        name: Some("Acme".into()),
        company_name: None,
    };

    let result = store.create_project(&input, 7).await;
    assert_matches!(result, Err(StoreError::Constraint(_)));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "owner link must roll back with the project");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL DATABASE_URL"]
async fn unknown_project_is_a_constraint_error(pool: PgPool) {
    let store = PgStore::new(pool);
    let result = store
        .create_localization(&CreateLocalization {
            project_id: 999,
            place: Some("Shelf".into()),
        })
        .await;
    assert_matches!(result, Err(StoreError::Constraint(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL DATABASE_URL"]
async fn project_delete_cascades_and_reference_delete_nulls(pool: PgPool) {
    let store = PgStore::new(pool);
    let project = store.create_project(&acme(), 1).await.unwrap();
    let localization = store
        .create_localization(&CreateLocalization {
            project_id: project.id,
            place: Some("Shelf A".into()),
        })
        .await
        .unwrap();
    let item = store
        .create_inventory(&CreateInventory {
            project_id: project.id,
            name: "Drill".into(),
            localization_id: Some(localization.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(item.quantity, 0);

    store.delete_localization(localization.id).await.unwrap();
    let item = store.find_inventory(item.id).await.unwrap().unwrap();
    assert!(item.localization_id.is_none());

    assert!(store.delete_project(project.id).await.unwrap());
    assert!(store.find_inventory(item.id).await.unwrap().is_none());
    assert!(store.list_project_members(project.id).await.unwrap().is_empty());
}
