use crate::types::DbId;

/// Domain error shared by every crate in the workspace.
///
/// The generation core itself is total; the only failures it reports come
/// from turning raw (stringly) overrides into typed ones.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
