pub mod character;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /characters                     list stored characters
/// /characters/random              random generation
/// /characters/seed/{seed}         seeded generation (reuses stored results)
/// /characters/custom              generation with overrides
/// /characters/{id}                get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/characters", character::router())
}
