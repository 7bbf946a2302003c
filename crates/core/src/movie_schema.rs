//! The movie record schema and its create / partial-update entry points.
//!
//! The upper bound on `year` is the current calendar year in UTC, read on
//! every call, so the accepted range moves forward with real time.

use chrono::{Datelike, Utc};
use serde_json::{json, Map, Value};

use crate::movie::{CreateMovie, Genre, UpdateMovie, DEFAULT_RATE};
use crate::validation::{
    evaluate_rules, EvaluationMode, FieldRule, FieldViolation, ValidationError, ViolationKind,
};

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Build the movie schema for a given current year.
pub fn movie_rules(current_year: i32) -> Vec<FieldRule> {
    vec![
        FieldRule::text("title")
            .required_message("title is required")
            .type_message("title must be text"),
        FieldRule::integer("year")
            .min(f64::from(MIN_YEAR))
            .max(f64::from(current_year)),
        FieldRule::text("director"),
        FieldRule::integer("duration").positive(),
        FieldRule::text("poster")
            .url()
            .constraint_message("poster must be a valid URL"),
        FieldRule::enum_list("genre", Genre::NAMES)
            .required_message("genre is required")
            .type_message("genre must be an array of the allowed values"),
        FieldRule::number("rate")
            .min(0.0)
            .max(10.0)
            .default_value(json!(DEFAULT_RATE)),
    ]
}

/// Validate a full record for creation. `rate` defaults to 3 when absent.
pub fn validate_create(input: &Value) -> Result<CreateMovie, ValidationError> {
    validate_create_for_year(input, current_year())
}

/// Validate a partial record for update. Only present fields are checked and
/// returned; unknown fields, including `id`, are ignored.
pub fn validate_partial(input: &Value) -> Result<UpdateMovie, ValidationError> {
    validate_partial_for_year(input, current_year())
}

fn validate_create_for_year(input: &Value, year: i32) -> Result<CreateMovie, ValidationError> {
    let fields = evaluate_rules(&movie_rules(year), input, EvaluationMode::Full)?;
    into_typed(fields)
}

fn validate_partial_for_year(input: &Value, year: i32) -> Result<UpdateMovie, ValidationError> {
    let fields = evaluate_rules(&movie_rules(year), input, EvaluationMode::Partial)?;
    into_typed(fields)
}

fn current_year() -> i32 {
    Utc::now().year()
}

/// Convert evaluator output into a typed record. The rules already pin down
/// every shape, so a failure here is reported as a type violation rather
/// than escaping the result channel.
fn into_typed<T: serde::de::DeserializeOwned>(
    fields: Map<String, Value>,
) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        ValidationError::new(vec![FieldViolation {
            field: String::new(),
            index: None,
            kind: ViolationKind::InvalidType,
            message: err.to_string(),
        }])
    })
}
