//! Rule evaluator — pure logic, no I/O.

use serde_json::{Map, Value};
use validator::ValidateUrl;

use super::rules::{
    Constraint, FieldRule, FieldType, FieldViolation, ValidationError, ViolationKind,
};

/// `i64::MAX as f64` rounds up to 2^63, so this bound is exclusive.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// How absent fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Required fields must be present; defaults are applied.
    Full,
    /// Every field is optional; only present fields are checked.
    Partial,
}

/// Check `input` against `rules`.
///
/// On success returns a map holding only the fields named by the rules, with
/// defaults applied and integers normalized. Fields not covered by any rule
/// are dropped, never rejected.
pub fn evaluate_rules(
    rules: &[FieldRule],
    input: &Value,
    mode: EvaluationMode,
) -> Result<Map<String, Value>, ValidationError> {
    let Some(data) = input.as_object() else {
        return Err(ValidationError::new(vec![FieldViolation {
            field: String::new(),
            index: None,
            kind: ViolationKind::InvalidType,
            message: "expected a JSON object".to_string(),
        }]));
    };

    let mut output = Map::new();
    let mut issues = Vec::new();

    for rule in rules {
        match data.get(rule.name) {
            Some(value) => match evaluate_field(rule, value) {
                Ok(normalized) => {
                    output.insert(rule.name.to_string(), normalized);
                }
                Err(mut violations) => issues.append(&mut violations),
            },
            None if mode == EvaluationMode::Partial => {}
            None => {
                if let Some(default) = &rule.default {
                    output.insert(rule.name.to_string(), default.clone());
                } else if rule.required {
                    issues.push(violation(
                        rule,
                        ViolationKind::Required,
                        rule.required_message
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{} is required", rule.name)),
                    ));
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(output)
    } else {
        Err(ValidationError::new(issues))
    }
}

fn evaluate_field(rule: &FieldRule, value: &Value) -> Result<Value, Vec<FieldViolation>> {
    let normalized = match &rule.field_type {
        FieldType::Text if value.is_string() => value.clone(),
        FieldType::Number if value.is_number() => value.clone(),
        FieldType::Integer if value.is_number() => match as_integer(value) {
            Ok(int) => Value::from(int),
            Err(kind) => {
                let message = match kind {
                    ViolationKind::NotInteger => format!("{} must be an integer", rule.name),
                    _ => format!("{} is outside the integer range", rule.name),
                };
                return Err(vec![violation(rule, kind, message)]);
            }
        },
        FieldType::EnumList(allowed) if value.is_array() => {
            let bad = invalid_elements(rule, value, allowed);
            if !bad.is_empty() {
                return Err(bad);
            }
            value.clone()
        }
        _ => {
            return Err(vec![violation(
                rule,
                ViolationKind::InvalidType,
                rule.type_message.map(str::to_string).unwrap_or_else(|| {
                    format!("{} must be {}", rule.name, rule.field_type.describe())
                }),
            )])
        }
    };

    let violations: Vec<_> = rule
        .constraints
        .iter()
        .filter_map(|constraint| evaluate_constraint(rule, constraint, &normalized))
        .collect();

    if violations.is_empty() {
        Ok(normalized)
    } else {
        Err(violations)
    }
}

fn evaluate_constraint(
    rule: &FieldRule,
    constraint: &Constraint,
    value: &Value,
) -> Option<FieldViolation> {
    let (kind, default_message) = match constraint {
        Constraint::Min(min) => {
            let num = value.as_f64()?;
            if num >= *min {
                return None;
            }
            (
                ViolationKind::TooSmall,
                format!("{} must be greater than or equal to {min}", rule.name),
            )
        }
        Constraint::Max(max) => {
            let num = value.as_f64()?;
            if num <= *max {
                return None;
            }
            (
                ViolationKind::TooBig,
                format!("{} must be less than or equal to {max}", rule.name),
            )
        }
        Constraint::Positive => {
            let num = value.as_f64()?;
            if num > 0.0 {
                return None;
            }
            (
                ViolationKind::TooSmall,
                format!("{} must be greater than 0", rule.name),
            )
        }
        Constraint::Url => {
            let s = value.as_str()?;
            if s.validate_url() {
                return None;
            }
            (
                ViolationKind::InvalidUrl,
                format!("{} must be a valid URL", rule.name),
            )
        }
    };

    let message = rule
        .constraint_message
        .map(str::to_string)
        .unwrap_or(default_message);
    Some(violation(rule, kind, message))
}

fn invalid_elements(
    rule: &FieldRule,
    value: &Value,
    allowed: &[&str],
) -> Vec<FieldViolation> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.as_str().is_some_and(|s| allowed.contains(&s)))
        .map(|(index, item)| FieldViolation {
            field: rule.name.to_string(),
            index: Some(index),
            kind: ViolationKind::InvalidEnum,
            message: format!(
                "invalid {} value {item}, expected one of: {}",
                rule.name,
                allowed.join(", ")
            ),
        })
        .collect()
}

/// Integral values that do not fit an `i64` are a range problem, not a
/// fractional one.
fn as_integer(value: &Value) -> Result<i64, ViolationKind> {
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }
    let float = value.as_f64().ok_or(ViolationKind::InvalidType)?;
    if float.fract() != 0.0 {
        Err(ViolationKind::NotInteger)
    } else if float >= I64_UPPER {
        Err(ViolationKind::TooBig)
    } else if float < -I64_UPPER {
        Err(ViolationKind::TooSmall)
    } else {
        Ok(float as i64)
    }
}

fn violation(rule: &FieldRule, kind: ViolationKind, message: String) -> FieldViolation {
    FieldViolation {
        field: rule.name.to_string(),
        index: None,
        kind,
        message,
    }
}
