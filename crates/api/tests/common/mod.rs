#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use inventory_core::types::DbId;
use tower::ServiceExt;

use inventory_api::auth::jwt::JwtConfig;
use inventory_api::auth::JwtResolver;
use inventory_api::config::{ServerConfig, StoreBackend};
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;
use inventory_db::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// JWT settings shared by the app under test and [`token_for`].
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_ttl_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over `store`, using the same middleware
/// stack as production.
///
/// Keep a clone of the `Arc` to seed or inspect the store directly.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        auth: Arc::new(JwtResolver::new(config.jwt.clone())),
        store,
    };
    build_app_router(state, &config)
}

/// Mint a valid access token for `user_id`.
pub fn token_for(user_id: DbId) -> String {
    test_jwt_config().issue(user_id).expect("token generation should succeed")
}

/// Send `request` through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Build and send a request, optionally authenticated and with a JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("authorization", format!("Bearer {}", token_for(user_id)));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    send(app, builder.body(body).unwrap()).await
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, user_id: DbId) -> Response<Body> {
    request(app, Method::GET, uri, Some(user_id), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, Some(user_id), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PATCH, uri, Some(user_id), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, user_id: DbId) -> Response<Body> {
    request(app, Method::DELETE, uri, Some(user_id), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and `message` of a response in one go.
pub async fn assert_message(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["message"], message, "unexpected body: {json}");
}

/// Create a project through the API as `user_id` and return its id.
pub async fn create_project(app: &Router, user_id: DbId, name: &str) -> DbId {
    let response = post_json_auth(
        app.clone(),
        "/projects/",
        user_id,
        serde_json::json!({"name": name, "company_name": format!("{name} Inc")}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let projects = body_json(get_auth(app.clone(), "/projects/", user_id).await).await;
    projects
        .as_array()
        .and_then(|all| all.iter().rev().find(|p| p["name"] == name))
        .and_then(|p| p["id"].as_i64())
        .expect("created project should be listed")
}
