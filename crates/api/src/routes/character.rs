//! Route definitions for the `/characters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                 -> list
/// GET    /random           -> random
/// GET    /seed/{seed}      -> seeded
/// GET    /custom           -> custom
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list))
        .route("/random", get(character::random))
        .route("/seed/{seed}", get(character::seeded))
        .route("/custom", get(character::custom))
        .route(
            "/{id}",
            get(character::get_by_id).delete(character::delete),
        )
}
