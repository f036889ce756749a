use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `builtin`, or `file` when `POOLS_PATH` replaced the built-in pools.
    pub pools_source: &'static str,
    /// Background templates available to the generator.
    pub background_templates: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = charforge_db::health_check(&state.pool).await.is_ok();
    let pools_source = if state.config.pools_path.is_some() {
        "file"
    } else {
        "builtin"
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pools_source,
        background_templates: state.pools.background_templates.len(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
