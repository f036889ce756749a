use std::net::SocketAddr;
use std::sync::Arc;

use charforge_core::pools::Pools;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_api::config::ServerConfig;
use charforge_api::router::build_app_router;
use charforge_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        max_bulk_count = config.max_bulk_count,
        "Loaded server configuration",
    );

    // --- Reference pools ---
    let pools = load_pools(&config);
    tracing::info!(
        source = config.pools_path.as_deref().unwrap_or("builtin"),
        templates = pools.background_templates.len(),
        "Reference pools loaded",
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = charforge_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    charforge_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    charforge_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pools: Arc::new(pools),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Load the pool file named by `POOLS_PATH`, or the built-in pools.
///
/// Panics on an unreadable or malformed file so misconfiguration fails at
/// startup rather than on the first request.
fn load_pools(config: &ServerConfig) -> Pools {
    let Some(path) = config.pools_path.as_deref() else {
        return Pools::builtin();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read POOLS_PATH '{path}': {e}"));
    Pools::from_json(&text).unwrap_or_else(|e| panic!("Invalid pool file '{path}': {e}"))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
