//! Query parameter types for the character endpoints.
//!
//! Every value is taken as a string and validated here, so malformed input
//! produces the JSON error envelope instead of an extractor rejection.

use charforge_core::character::{ensure_storable, parse_numeric_override, RawOverrides};
use charforge_core::error::CoreError;
use charforge_core::filter::parse_field_list;
use charforge_core::rng::Seed;
use serde::Deserialize;

/// Pagination parameters (`?limit=&offset=`), clamped in the repository.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Parsed `(limit, offset)`; blank values are unset.
    pub fn resolve(&self) -> Result<(Option<i64>, Option<i64>), CoreError> {
        let parse = |field: &str, raw: Option<&str>| {
            raw.filter(|s| !s.trim().is_empty())
                .map(|v| parse_numeric_override(field, v).map(i64::from))
                .transpose()
        };
        Ok((
            parse("limit", self.limit.as_deref())?,
            parse("offset", self.offset.as_deref())?,
        ))
    }
}

/// `?count=&fields=` accepted by every generation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BulkParams {
    pub count: Option<String>,
    pub fields: Option<String>,
}

/// Parameters for `/characters/custom`.
#[derive(Debug, Default, Deserialize)]
pub struct CustomParams {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub height_cm: Option<String>,
    pub build: Option<String>,
    pub seed: Option<String>,
    pub count: Option<String>,
    pub fields: Option<String>,
}

impl CustomParams {
    pub fn overrides(&self) -> RawOverrides {
        RawOverrides {
            name: self.name.clone(),
            gender: self.gender.clone(),
            age: self.age.clone(),
            occupation: self.occupation.clone(),
            hair_color: self.hair_color.clone(),
            eye_color: self.eye_color.clone(),
            height_cm: self.height_cm.clone(),
            build: self.build.clone(),
        }
    }

    /// The seed, if one was given and is not blank.
    pub fn seed(&self) -> Result<Option<Seed>, CoreError> {
        self.seed
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(parse_seed)
            .transpose()
    }
}

/// Any text is a valid seed as long as it can be stored alongside the
/// character it produces.
pub fn parse_seed(raw: &str) -> Result<Seed, CoreError> {
    ensure_storable("seed", raw)?;
    Ok(Seed::from(raw))
}

/// Resolve `count`: defaults to 1 and must lie in `[1, max]`.
pub fn resolve_count(raw: Option<&str>, max: usize) -> Result<usize, CoreError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(1);
    };
    let count = parse_numeric_override("count", raw)?;
    if count < 1 || count as usize > max {
        return Err(CoreError::Validation(format!(
            "count must be between 1 and {max}, got {count}"
        )));
    }
    Ok(count as usize)
}

/// Requested response fields, `None` when no filtering applies.
pub fn requested_fields(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(parse_field_list).filter(|f| !f.is_empty())
}
