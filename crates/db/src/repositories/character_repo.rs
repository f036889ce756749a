//! Repository for the `characters` table.

use charforge_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::character::{CharacterRow, NewCharacter, StoredCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, seed, is_custom, name, age, gender, occupation, background, \
     hair_color, eye_color, height_cm, build, personality_traits, hobbies, created_at";

/// Default page size for [`CharacterRepo::list`].
pub const DEFAULT_LIST_LIMIT: i64 = 20;
/// Largest page size [`CharacterRepo::list`] will return.
pub const MAX_LIST_LIMIT: i64 = 100;

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides insert and lookup operations for generated characters.
pub struct CharacterRepo;

impl CharacterRepo {
    async fn insert(
        conn: &mut PgConnection,
        input: &NewCharacter,
    ) -> Result<StoredCharacter, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (seed, is_custom, name, age, gender, occupation, background,
                 hair_color, eye_color, height_cm, build, personality_traits, hobbies)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let c = &input.character;
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(&c.seed)
            .bind(input.is_custom)
            .bind(&c.name)
            .bind(c.age)
            .bind(c.gender.as_str())
            .bind(&c.occupation)
            .bind(&c.background)
            .bind(&c.appearance.hair_color)
            .bind(&c.appearance.eye_color)
            .bind(c.appearance.height_cm)
            .bind(&c.appearance.build)
            .bind(&c.personality_traits)
            .bind(&c.hobbies)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.into())
    }

    /// Insert one character, returning it with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewCharacter) -> Result<StoredCharacter, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let stored = Self::insert(&mut *conn, input).await?;
        tracing::debug!(id = stored.id, seed = ?stored.character.seed, "Character stored");
        Ok(stored)
    }

    /// Insert a batch within a single transaction, preserving input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[NewCharacter],
    ) -> Result<Vec<StoredCharacter>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(Self::insert(&mut *tx, input).await?);
        }
        tx.commit().await?;
        tracing::debug!(count = results.len(), "Character batch stored");
        Ok(results)
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoredCharacter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Find the earliest non-custom character generated from `seed`.
    pub async fn find_by_seed(
        pool: &PgPool,
        seed: &str,
    ) -> Result<Option<StoredCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE seed = $1 AND is_custom = FALSE
             ORDER BY id ASC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(seed)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List characters newest first. `limit` is clamped to
    /// `[1, MAX_LIST_LIMIT]`, `offset` to non-negative.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<StoredCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Total number of stored characters.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every stored character. Used by the seed CLI's `--reset`.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
