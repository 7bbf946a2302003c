//! Schema-driven validation engine.
//!
//! A schema is a list of [`rules::FieldRule`] values; [`evaluator::evaluate_rules`]
//! checks arbitrary JSON against it and returns either the validated fields or
//! every field-level violation found.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, EvaluationMode};
pub use rules::{Constraint, FieldRule, FieldType, FieldViolation, ValidationError, ViolationKind};
