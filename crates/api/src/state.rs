use std::sync::Arc;

use charforge_core::pools::Pools;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: charforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reference pools, loaded once at startup and read-only afterwards.
    pub pools: Arc<Pools>,
}
