//! Movie payload validation.
//!
//! Two modes share one reader:
//!
//! - [`validate_movie`] (creation): every required field must be present and
//!   well-typed. `rating` may be omitted and defaults to [`DEFAULT_RATING`].
//! - [`validate_partial_movie`] (update): any subset of recognized fields.
//!
//! Checking runs in two passes. The reader pulls each recognized field out of
//! the JSON object and records type errors; the `validator` rules declared on
//! [`MoviePatch`] then check ranges and formats on the well-typed values.
//! All issues are collected and returned together, ordered by schema field
//! order. Unknown fields (including any client-supplied `id`) are ignored.

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::movie::{Genre, MoviePatch, NewMovie, DEFAULT_RATING};

// ---------------------------------------------------------------------------
// Field names and issue codes
// ---------------------------------------------------------------------------

pub const FIELD_BODY: &str = "body";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_DIRECTOR: &str = "director";
pub const FIELD_DURATION: &str = "duration";
pub const FIELD_RATING: &str = "rating";
pub const FIELD_POSTER: &str = "poster";
pub const FIELD_GENRE: &str = "genre";

/// Schema field order; issues are reported in this order.
const FIELD_ORDER: &[&str] = &[
    FIELD_BODY,
    FIELD_TITLE,
    FIELD_YEAR,
    FIELD_DIRECTOR,
    FIELD_DURATION,
    FIELD_RATING,
    FIELD_POSTER,
    FIELD_GENRE,
];

/// Fields that must be present on creation.
const REQUIRED_FIELDS: &[&str] = &[
    FIELD_TITLE,
    FIELD_YEAR,
    FIELD_DIRECTOR,
    FIELD_DURATION,
    FIELD_POSTER,
    FIELD_GENRE,
];

pub const CODE_REQUIRED: &str = "required";
pub const CODE_INVALID_TYPE: &str = "invalid_type";
pub const CODE_INVALID_ENUM_VALUE: &str = "invalid_enum_value";

// ---------------------------------------------------------------------------
// Failure types
// ---------------------------------------------------------------------------

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Every issue found in a rejected payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Whether any issue was reported against `field`.
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }

    fn from_issues(mut issues: Vec<FieldIssue>) -> Self {
        issues.sort_by_key(|i| field_rank(&i.field));
        Self { issues }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a creation payload.
pub fn validate_movie(body: &Value) -> Result<NewMovie, ValidationFailure> {
    let object = require_object(body)?;
    let (mut patch, mut issues) = read_patch(object);

    for field in REQUIRED_FIELDS {
        // A present-but-mistyped field already has an invalid_type issue.
        if !object.contains_key(*field) {
            issues.push(FieldIssue::new(field, CODE_REQUIRED, required_message(field)));
        }
    }

    if !object.contains_key(FIELD_RATING) {
        patch.rating = Some(DEFAULT_RATING);
    }
    issues.extend(rule_issues(&patch));

    match (
        patch.title,
        patch.year,
        patch.director,
        patch.duration,
        patch.rating,
        patch.poster,
        patch.genre,
    ) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rating),
            Some(poster),
            Some(genre),
        ) if issues.is_empty() => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            rating,
            poster,
            genre,
        }),
        _ => Err(ValidationFailure::from_issues(issues)),
    }
}

/// Validate an update payload. An empty object is valid and yields an
/// empty patch.
pub fn validate_partial_movie(body: &Value) -> Result<MoviePatch, ValidationFailure> {
    let object = require_object(body)?;
    let (patch, mut issues) = read_patch(object);
    issues.extend(rule_issues(&patch));

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationFailure::from_issues(issues))
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

fn require_object(body: &Value) -> Result<&Map<String, Value>, ValidationFailure> {
    body.as_object().ok_or_else(|| {
        ValidationFailure::from_issues(vec![FieldIssue::new(
            FIELD_BODY,
            CODE_INVALID_TYPE,
            "Request body must be a JSON object",
        )])
    })
}

/// Pull every recognized field out of `object`, recording type errors.
/// Fields that are absent or mistyped come back as `None`.
fn read_patch(object: &Map<String, Value>) -> (MoviePatch, Vec<FieldIssue>) {
    let mut issues = Vec::new();

    let patch = MoviePatch {
        title: read_string(object, FIELD_TITLE, "Movie title must be a string", &mut issues),
        year: read_int(object, FIELD_YEAR, &mut issues),
        director: read_string(object, FIELD_DIRECTOR, "Director must be a string", &mut issues),
        duration: read_int(object, FIELD_DURATION, &mut issues),
        rating: read_number(object, FIELD_RATING, &mut issues),
        poster: read_string(object, FIELD_POSTER, "Poster must be a string", &mut issues),
        genre: read_genres(object, &mut issues),
    };

    (patch, issues)
}

fn read_string(
    object: &Map<String, Value>,
    field: &str,
    message: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        _ => {
            issues.push(FieldIssue::new(field, CODE_INVALID_TYPE, message));
            None
        }
    }
}

fn read_int(object: &Map<String, Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<i32> {
    let value = object.get(field)?;
    // `2014.0` is a whole number even though JSON carries it as a float.
    let whole = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    });
    let Some(n) = whole else {
        issues.push(FieldIssue::new(
            field,
            CODE_INVALID_TYPE,
            format!("{} must be an integer", capitalize(field)),
        ));
        return None;
    };
    match i32::try_from(n) {
        Ok(n) => Some(n),
        Err(_) => {
            issues.push(FieldIssue::new(
                field,
                "range",
                format!("{} is out of range", capitalize(field)),
            ));
            None
        }
    }
}

fn read_number(
    object: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<f64> {
    let value = object.get(field)?;
    match value.as_f64() {
        Some(n) => Some(n),
        None => {
            issues.push(FieldIssue::new(
                field,
                CODE_INVALID_TYPE,
                format!("{} must be a number", capitalize(field)),
            ));
            None
        }
    }
}

fn read_genres(object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<Vec<Genre>> {
    let Value::Array(items) = object.get(FIELD_GENRE)? else {
        issues.push(FieldIssue::new(
            FIELD_GENRE,
            CODE_INVALID_TYPE,
            "Movie genre must be an array of enum Genre",
        ));
        return None;
    };

    // Genres form a set: repeats collapse onto their first occurrence.
    let mut genres: Vec<Genre> = Vec::with_capacity(items.len());
    let mut valid = true;
    for item in items {
        match item.as_str().and_then(Genre::from_label) {
            Some(genre) if genres.contains(&genre) => {}
            Some(genre) => genres.push(genre),
            None => {
                valid = false;
                issues.push(FieldIssue::new(
                    FIELD_GENRE,
                    CODE_INVALID_ENUM_VALUE,
                    format!(
                        "Invalid genre {item}. Expected one of: {}",
                        allowed_genres()
                    ),
                ));
            }
        }
    }

    valid.then_some(genres)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the declarative range/format rules and flatten any failures.
fn rule_issues(patch: &MoviePatch) -> Vec<FieldIssue> {
    match patch.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => flatten(&errors),
    }
}

fn flatten(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            let message = match &err.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            };
            issues.push(FieldIssue::new(&field.to_string(), &err.code, message));
        }
    }
    issues
}

fn required_message(field: &str) -> String {
    match field {
        FIELD_TITLE => "Movie title is required.".to_string(),
        FIELD_GENRE => "Movie genre is required.".to_string(),
        other => format!("{} is required.", capitalize(other)),
    }
}

fn allowed_genres() -> String {
    Genre::ALL
        .iter()
        .map(Genre::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
