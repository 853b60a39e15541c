//! HTTP-level integration tests for the project-scoped resources:
//! localizations, statuses and types.
//!
//! The three share one contract and differ only in path, display field and
//! message wording, so most tests run against each [`Resource`] in turn.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{
    assert_message, body_json, build_test_app, create_project, delete_auth, get_auth,
    patch_json_auth, post_json_auth, request,
};
use inventory_db::MemoryStore;
use serde_json::json;

struct Resource {
    path: &'static str,
    field: &'static str,
    created: fn(&str, &str) -> String,
    updated: fn(&str) -> String,
    invalid: fn(&str) -> String,
    deleted: fn(&str) -> String,
    missing_patch: &'static str,
    missing_delete: &'static str,
}

const RESOURCES: [Resource; 3] = [
    Resource {
        path: "localizations",
        field: "place",
        created: |v, p| format!("Localization: {v} add to {p} project"),
        updated: |v| format!("Localization {v} updated"),
        invalid: |v| format!("Cannot update {v} localization, data invalid"),
        deleted: |v| format!("Localization {v} has been deleted"),
        missing_patch: "Missing localization id!",
        missing_delete: "Missing Localization id!",
    },
    Resource {
        path: "statuses",
        field: "status",
        created: |v, p| format!("Status: {v} add to {p} project"),
        updated: |v| format!("status {v} updated"),
        invalid: |v| format!("Cannot update {v} status, data invalid"),
        deleted: |v| format!("status {v} has been deleted"),
        missing_patch: "Missing status id!",
        missing_delete: "Missing status id!",
    },
    Resource {
        path: "types",
        field: "name",
        created: |v, p| format!("Type: {v} add to {p} project"),
        updated: |v| format!("type {v} updated"),
        invalid: |v| format!("Cannot update {v} type, data invalid"),
        deleted: |v| format!("type {v} has been deleted"),
        missing_patch: "Missing type id!",
        missing_delete: "Missing type id!",
    },
];

/// Create a row through the API and return its id.
async fn create_row(app: &axum::Router, project_id: i64, resource: &Resource, value: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        &format!("/projects/{project_id}/{}/", resource.path),
        7,
        json!({ resource.field: value }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = body_json(
        get_auth(
            app.clone(),
            &format!("/projects/{project_id}/{}/", resource.path),
            7,
        )
        .await,
    )
    .await;
    rows.as_array()
        .and_then(|all| all.iter().rev().find(|r| r[resource.field] == value))
        .and_then(|r| r["id"].as_i64())
        .expect("created row should be listed")
}

#[tokio::test]
async fn create_reports_value_and_project() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;

        let response = post_json_auth(
            app.clone(),
            &format!("/projects/{project_id}/{}/", resource.path),
            7,
            json!({ resource.field: "Alpha" }),
        )
        .await;
        assert_message(response, StatusCode::OK, &(resource.created)("Alpha", "Acme")).await;

        let rows = body_json(
            get_auth(app, &format!("/projects/{project_id}/{}/", resource.path), 7).await,
        )
        .await;
        assert_eq!(rows[0]["project_id"], project_id);
        assert_eq!(rows[0][resource.field], "Alpha");
    }
}

#[tokio::test]
async fn create_under_unknown_project_is_404() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let response = post_json_auth(
            app,
            &format!("/projects/404/{}/", resource.path),
            7,
            json!({ resource.field: "Alpha" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", resource.path);
    }
}

#[tokio::test]
async fn unknown_project_wins_over_bad_body() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let uri = format!("/projects/404/{}/", resource.path);

        let response = request(app.clone(), Method::POST, &uri, Some(7), None).await;
        assert_message(response, StatusCode::NOT_FOUND, "Project with id 404 not found").await;

        let response = request(app, Method::POST, &uri, Some(7), Some(json!([1, 2]))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", resource.path);
    }
}

#[tokio::test]
async fn create_without_field_is_missing_requirements() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;

        let response = post_json_auth(
            app,
            &format!("/projects/{project_id}/{}/", resource.path),
            7,
            json!({}),
        )
        .await;
        assert_message(
            response,
            StatusCode::BAD_REQUEST,
            "missing requirement parameters",
        )
        .await;
    }
}

#[tokio::test]
async fn post_on_item_path_creates_row() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;

        let response = post_json_auth(
            app,
            &format!("/projects/{project_id}/{}/123/", resource.path),
            7,
            json!({ resource.field: "Beta" }),
        )
        .await;
        assert_message(response, StatusCode::OK, &(resource.created)("Beta", "Acme")).await;
    }
}

#[tokio::test]
async fn empty_list_is_404() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;

        let response = get_auth(
            app,
            &format!("/projects/{project_id}/{}/", resource.path),
            7,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", resource.path);
    }
}

#[tokio::test]
async fn list_only_includes_rows_of_that_project() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let acme = create_project(&app, 7, "Acme").await;
        let other = create_project(&app, 7, "Other").await;
        create_row(&app, acme, resource, "Mine").await;
        create_row(&app, other, resource, "Theirs").await;

        let rows = body_json(
            get_auth(app, &format!("/projects/{acme}/{}/", resource.path), 7).await,
        )
        .await;
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][resource.field], "Mine");
    }
}

#[tokio::test]
async fn get_by_id_ignores_project_scope() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let acme = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, acme, resource, "Alpha").await;

        let response = get_auth(
            app,
            &format!("/projects/99999/{}/{id}/", resource.path),
            7,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], id);
        assert_eq!(json["project_id"], acme);
    }
}

#[tokio::test]
async fn patch_updates_and_reports_new_value() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, project_id, resource, "Alpha").await;
        let uri = format!("/projects/{project_id}/{}/{id}/", resource.path);

        let response =
            patch_json_auth(app.clone(), &uri, 7, json!({ resource.field: "Gamma" })).await;
        assert_message(response, StatusCode::OK, &(resource.updated)("Gamma")).await;

        let json = body_json(get_auth(app, &uri, 7).await).await;
        assert_eq!(json[resource.field], "Gamma");
    }
}

#[tokio::test]
async fn patch_with_invalid_value_reports_old_value() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, project_id, resource, "Alpha").await;

        let response = patch_json_auth(
            app,
            &format!("/projects/{project_id}/{}/{id}/", resource.path),
            7,
            json!({ resource.field: null }),
        )
        .await;
        assert_message(response, StatusCode::BAD_REQUEST, &(resource.invalid)("Alpha")).await;
    }
}

#[tokio::test]
async fn patch_unknown_row_is_404() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;

        let response = patch_json_auth(
            app,
            &format!("/projects/{project_id}/{}/31337/", resource.path),
            7,
            json!({ resource.field: "Gamma" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", resource.path);
    }
}

#[tokio::test]
async fn patch_without_body_checks_row_first() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, project_id, resource, "Alpha").await;

        let missing = format!("/projects/{project_id}/{}/31337/", resource.path);
        let response = request(app.clone(), Method::PATCH, &missing, Some(7), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", resource.path);

        let existing = format!("/projects/{project_id}/{}/{id}/", resource.path);
        let response = request(app, Method::PATCH, &existing, Some(7), None).await;
        assert_message(response, StatusCode::BAD_REQUEST, &(resource.invalid)("Alpha")).await;
    }
}

#[tokio::test]
async fn missing_id_messages() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let uri = format!("/projects/1/{}/", resource.path);

        let response = patch_json_auth(app.clone(), &uri, 7, json!({})).await;
        assert_message(response, StatusCode::BAD_REQUEST, resource.missing_patch).await;

        let response = delete_auth(app, &uri, 7).await;
        assert_message(response, StatusCode::BAD_REQUEST, resource.missing_delete).await;
    }
}

#[tokio::test]
async fn delete_then_get_is_404() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let project_id = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, project_id, resource, "Alpha").await;
        let uri = format!("/projects/{project_id}/{}/{id}/", resource.path);

        let response = delete_auth(app.clone(), &uri, 7).await;
        assert_message(response, StatusCode::OK, &(resource.deleted)("Alpha")).await;

        let response = get_auth(app.clone(), &uri, 7).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = delete_auth(app, &uri, 7).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn other_members_can_write_children() {
    // Child routes check authentication only, not project membership.
    let app = build_test_app(Arc::new(MemoryStore::new()));
    let project_id = create_project(&app, 7, "Acme").await;

    let response = post_json_auth(
        app,
        &format!("/projects/{project_id}/localizations/"),
        8,
        json!({"place": "Shelf A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsupported_verb_is_405() {
    for resource in &RESOURCES {
        let app = build_test_app(Arc::new(MemoryStore::new()));
        let response = request(
            app.clone(),
            Method::PUT,
            &format!("/projects/1/{}/1/", resource.path),
            Some(7),
            None,
        )
        .await;
        assert_message(response, StatusCode::METHOD_NOT_ALLOWED, "invalid method").await;

        let project_id = create_project(&app, 7, "Acme").await;
        let id = create_row(&app, project_id, resource, "Alpha").await;
        for uri in [
            format!("/projects/{project_id}/{}/", resource.path),
            format!("/projects/{project_id}/{}/{id}/", resource.path),
        ] {
            let response = request(app.clone(), Method::HEAD, &uri, Some(7), None).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        }
    }
}
