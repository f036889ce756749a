//! Handlers for the `/characters` resource.
//!
//! Generation endpoints persist every character they produce and respond
//! with the stored form. `count=1` (the default) responds with a single
//! object, larger counts with an array in generation order.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use charforge_core::character::GenerationOptions;
use charforge_core::error::CoreError;
use charforge_core::filter::filter_fields;
use charforge_core::generator::{batch_seeds, generate, generate_batch};
use charforge_core::rng::Seed;
use charforge_core::types::DbId;
use charforge_db::models::character::{NewCharacter, StoredCharacter};
use charforge_db::repositories::CharacterRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::{
    parse_seed, requested_fields, resolve_count, BulkParams, CustomParams, PaginationParams,
};
use crate::response::DataResponse;
use crate::state::AppState;

type DataJson = Json<DataResponse<Value>>;

// ---------------------------------------------------------------------------
// Response shaping
// ---------------------------------------------------------------------------

/// Serialize stored characters, unwrap a single result, and apply `?fields=`.
fn render(stored: Vec<StoredCharacter>, single: bool, fields: Option<&str>) -> AppResult<DataJson> {
    let serialized = if single {
        let first = stored
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("generation produced no character".into()))?;
        serde_json::to_value(first)
    } else {
        serde_json::to_value(stored)
    };
    let value = serialized.map_err(|e| AppError::InternalError(e.to_string()))?;

    let data = match requested_fields(fields) {
        Some(fields) => filter_fields(&value, &fields),
        None => value,
    };
    Ok(Json(DataResponse { data }))
}

/// Generate a batch ready for insertion.
fn new_batch(
    state: &AppState,
    seed: Option<&Seed>,
    options: &GenerationOptions,
    count: usize,
) -> Vec<NewCharacter> {
    let is_custom = !options.is_empty();
    generate_batch(&state.pools, seed, options, count)
        .into_iter()
        .map(|character| NewCharacter {
            character,
            is_custom,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// GET /api/v1/characters/random
pub async fn random(
    State(state): State<AppState>,
    Query(params): Query<BulkParams>,
) -> AppResult<DataJson> {
    let count = resolve_count(params.count.as_deref(), state.config.max_bulk_count)?;
    let batch = new_batch(&state, None, &GenerationOptions::default(), count);
    let stored = CharacterRepo::create_many(&state.pool, &batch).await?;

    tracing::info!(count, "Random characters generated");
    render(stored, count == 1, params.fields.as_deref())
}

/// GET /api/v1/characters/seed/{seed}
///
/// Looks up each (sub-)seed first; only seeds with no stored, non-custom
/// character are generated and persisted.
pub async fn seeded(
    State(state): State<AppState>,
    Path(seed): Path<String>,
    Query(params): Query<BulkParams>,
) -> AppResult<DataJson> {
    let count = resolve_count(params.count.as_deref(), state.config.max_bulk_count)?;
    let base = parse_seed(&seed)?;
    let seeds = batch_seeds(&base, count);

    let mut slots: Vec<Option<StoredCharacter>> = Vec::with_capacity(count);
    let mut pending = Vec::new();
    for (index, seed) in seeds.iter().enumerate() {
        match CharacterRepo::find_by_seed(&state.pool, seed.as_str()).await? {
            Some(found) => slots.push(Some(found)),
            None => {
                slots.push(None);
                pending.push((
                    index,
                    NewCharacter {
                        character: generate(&state.pools, Some(seed), &GenerationOptions::default()),
                        is_custom: false,
                    },
                ));
            }
        }
    }

    let (indices, inputs): (Vec<usize>, Vec<NewCharacter>) = pending.into_iter().unzip();
    let created = CharacterRepo::create_many(&state.pool, &inputs).await?;
    let generated = created.len();
    for (index, stored) in indices.into_iter().zip(created) {
        slots[index] = Some(stored);
    }

    tracing::info!(
        seed = %base,
        count,
        generated,
        reused = count - generated,
        "Seeded characters served",
    );

    let stored: Vec<StoredCharacter> = slots.into_iter().flatten().collect();
    render(stored, count == 1, params.fields.as_deref())
}

/// GET /api/v1/characters/custom
///
/// Overrides are applied verbatim except `age` and `height_cm`, which must
/// be integers.
pub async fn custom(
    State(state): State<AppState>,
    Query(params): Query<CustomParams>,
) -> AppResult<DataJson> {
    let count = resolve_count(params.count.as_deref(), state.config.max_bulk_count)?;
    let options = params.overrides().into_options()?;
    let seed = params.seed()?;

    let batch = new_batch(&state, seed.as_ref(), &options, count);
    let stored = CharacterRepo::create_many(&state.pool, &batch).await?;

    tracing::info!(
        seed = ?seed.as_ref().map(Seed::as_str),
        count,
        overridden = !options.is_empty(),
        "Custom characters generated",
    );
    render(stored, count == 1, params.fields.as_deref())
}

// ---------------------------------------------------------------------------
// Stored characters
// ---------------------------------------------------------------------------

fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid character id '{raw}'")))
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<StoredCharacter>>>> {
    let (limit, offset) = params.resolve()?;
    let characters = CharacterRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<StoredCharacter>>> {
    let id = parse_id(&id)?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(DataResponse { data: character }))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if CharacterRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
