//! Stored character model.

use charforge_core::character::{Appearance, Character, Gender};
use charforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct CharacterRow {
    pub id: DbId,
    pub seed: Option<String>,
    pub is_custom: bool,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub occupation: String,
    pub background: String,
    pub hair_color: String,
    pub eye_color: String,
    pub height_cm: i32,
    pub build: String,
    pub personality_traits: Vec<String>,
    pub hobbies: Vec<String>,
    pub created_at: Timestamp,
}

/// A persisted character: the generated content plus its identifier.
///
/// Serializes flat (`{"id": .., "created_at": .., "name": .., ...}`) so the
/// field filter treats `id` like any other top-level field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredCharacter {
    pub id: DbId,
    pub is_custom: bool,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub character: Character,
}

impl From<CharacterRow> for StoredCharacter {
    fn from(row: CharacterRow) -> Self {
        // The table's CHECK constraint restricts gender to the four values.
        let gender = Gender::parse(&row.gender).unwrap_or(Gender::Other);
        Self {
            id: row.id,
            is_custom: row.is_custom,
            created_at: row.created_at,
            character: Character {
                name: row.name,
                age: row.age,
                gender,
                occupation: row.occupation,
                background: row.background,
                appearance: Appearance {
                    hair_color: row.hair_color,
                    eye_color: row.eye_color,
                    height_cm: row.height_cm,
                    build: row.build,
                },
                personality_traits: row.personality_traits,
                hobbies: row.hobbies,
                seed: row.seed,
            },
        }
    }
}

/// DTO for inserting a generated character.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub character: Character,
    /// `true` when overrides shaped the content; such rows never answer a
    /// plain seed lookup.
    pub is_custom: bool,
}
