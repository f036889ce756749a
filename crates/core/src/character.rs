//! Character data model and generation overrides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// The four recognised genders, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
}

impl Gender {
    /// Pool used when no valid gender override is given.
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::NonBinary, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::Other => "other",
        }
    }

    /// Recognise one of the four values (trimmed, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// Field names nested under `appearance`.
pub const APPEARANCE_FIELDS: [&str; 4] = ["hair_color", "eye_color", "height_cm", "build"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub hair_color: String,
    pub eye_color: String,
    pub height_cm: i32,
    pub build: String,
}

/// A generated character. Immutable once produced.
///
/// String fields drawn from an empty pool are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub occupation: String,
    pub background: String,
    pub appearance: Appearance,
    pub personality_traits: Vec<String>,
    pub hobbies: Vec<String>,
    /// Seed this character was generated from; `None` for random generation.
    pub seed: Option<String>,
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Typed overrides. Any `None` field is filled by the generator.
///
/// `gender` is kept as text: a value outside the four recognised genders is
/// ignored and the gender is drawn instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub height_cm: Option<i32>,
    pub build: Option<String>,
}

impl GenerationOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Overrides exactly as they arrive from a query string or CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOverrides {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub height_cm: Option<String>,
    pub build: Option<String>,
}

/// Blank values count as "not supplied".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject text that cannot be persisted: Postgres `TEXT` has no NUL.
pub fn ensure_storable(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// A non-blank free-text override, checked with [`ensure_storable`].
fn text_override(field: &str, value: Option<String>) -> Result<Option<String>, CoreError> {
    let value = non_blank(value);
    if let Some(v) = &value {
        ensure_storable(field, v)?;
    }
    Ok(value)
}

/// Parse a numeric override, reporting the field on failure.
pub fn parse_numeric_override(field: &str, value: &str) -> Result<i32, CoreError> {
    value.trim().parse::<i32>().map_err(|_| {
        CoreError::Validation(format!("{field} must be an integer, got '{value}'"))
    })
}

impl RawOverrides {
    /// Convert into typed options. Non-numeric `age` or `height_cm` is an
    /// invalid-input error, as is free text containing NUL; everything else
    /// is accepted verbatim.
    pub fn into_options(self) -> Result<GenerationOptions, CoreError> {
        let age = non_blank(self.age)
            .map(|v| parse_numeric_override("age", &v))
            .transpose()?;
        let height_cm = non_blank(self.height_cm)
            .map(|v| parse_numeric_override("height_cm", &v))
            .transpose()?;

        Ok(GenerationOptions {
            name: text_override("name", self.name)?,
            gender: text_override("gender", self.gender)?,
            age,
            occupation: text_override("occupation", self.occupation)?,
            hair_color: text_override("hair_color", self.hair_color)?,
            eye_color: text_override("eye_color", self.eye_color)?,
            height_cm,
            build: text_override("build", self.build)?,
        })
    }
}
