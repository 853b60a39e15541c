//! HTTP-level integration tests for the read-only inventory endpoints.
//!
//! Items are seeded straight into the store; the API never writes them.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{assert_message, body_json, build_test_app, get_auth, request};
use inventory_db::models::inventory::CreateInventory;
use inventory_db::models::localization::CreateLocalization;
use inventory_db::models::project::CreateProject;
use inventory_db::{EntityStore, MemoryStore};
use serde_json::json;

/// Seed a project owned by user 7 with one localized item; returns
/// `(project_id, item_id, localization_id)`.
async fn seed(store: &MemoryStore) -> (i64, i64, i64) {
    let project = store
        .create_project(
            &CreateProject {
                name: Some("Acme".into()),
                company_name: Some("Acme Inc".into()),
            },
            7,
        )
        .await
        .unwrap();
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
            description: Some("Cordless".into()),
            localization_id: Some(localization.id),
            quantity: Some(4),
            ..Default::default()
        })
        .await
        .unwrap();
    (project.id, item.id, localization.id)
}

#[tokio::test]
async fn list_returns_seeded_items() {
    let store = Arc::new(MemoryStore::new());
    let (project_id, item_id, localization_id) = seed(&store).await;
    let app = build_test_app(store);

    let response = get_auth(app, &format!("/projects/{project_id}/inventory/"), 7).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    let item = &json[0];
    assert_eq!(item["id"], item_id);
    assert_eq!(item["name"], "Drill");
    assert_eq!(item["description"], "Cordless");
    assert_eq!(item["localization_id"], localization_id);
    assert!(item["status_id"].is_null());
    assert!(item["type_id"].is_null());
    assert_eq!(item["quantity"], 4);
}

#[tokio::test]
async fn get_by_id_returns_item() {
    let store = Arc::new(MemoryStore::new());
    let (project_id, item_id, _) = seed(&store).await;
    let app = build_test_app(store);

    let response = get_auth(
        app,
        &format!("/projects/{project_id}/inventory/{item_id}/"),
        7,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Drill");
}

#[tokio::test]
async fn unknown_item_and_empty_project_are_404() {
    let store = Arc::new(MemoryStore::new());
    let (project_id, _, _) = seed(&store).await;
    let app = build_test_app(store);

    let response = get_auth(
        app.clone(),
        &format!("/projects/{project_id}/inventory/999/"),
        7,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/projects/12345/inventory/", 7).await;
    assert_message(response, StatusCode::NOT_FOUND, "No Inventory found").await;
}

#[tokio::test]
async fn write_verbs_are_405() {
    let store = Arc::new(MemoryStore::new());
    let (project_id, item_id, _) = seed(&store).await;
    let app = build_test_app(store.clone());

    let collection = format!("/projects/{project_id}/inventory/");
    let item = format!("/projects/{project_id}/inventory/{item_id}/");
    for (method, uri) in [
        (Method::POST, &collection),
        (Method::PATCH, &collection),
        (Method::DELETE, &collection),
        (Method::POST, &item),
        (Method::PATCH, &item),
        (Method::DELETE, &item),
    ] {
        let response = request(
            app.clone(),
            method.clone(),
            uri,
            Some(7),
            Some(json!({"name": "Saw"})),
        )
        .await;
        assert_message(response, StatusCode::METHOD_NOT_ALLOWED, "invalid method").await;
    }

    for uri in [&collection, &item] {
        let response = request(app.clone(), Method::HEAD, uri, Some(7), None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
    }

    assert_eq!(store.list_inventory(project_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_localization_clears_item_reference() {
    let store = Arc::new(MemoryStore::new());
    let (project_id, item_id, localization_id) = seed(&store).await;
    let app = build_test_app(store);

    let response = request(
        app.clone(),
        Method::DELETE,
        &format!("/projects/{project_id}/localizations/{localization_id}/"),
        Some(7),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get_auth(
            app,
            &format!("/projects/{project_id}/inventory/{item_id}/"),
            7,
        )
        .await,
    )
    .await;
    assert!(json["localization_id"].is_null());
}
