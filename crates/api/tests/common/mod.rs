#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use charforge_core::pools::Pools;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use charforge_api::config::ServerConfig;
use charforge_api::router::build_app_router;
use charforge_api::state::AppState;

/// Bulk limit used by every test app.
pub const TEST_MAX_BULK: usize = 10;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_bulk_count: TEST_MAX_BULK,
        pools_path: None,
    }
}

/// Build the full application router over the built-in pools.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_pools(pool, Pools::builtin())
}

/// Build the full application router over fixture pools.
pub fn build_test_app_with_pools(pool: PgPool, pools: Pools) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pools: Arc::new(pools),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
