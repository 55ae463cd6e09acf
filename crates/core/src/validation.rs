//! Product validation engine.
//!
//! An explicit table of per-field rules evaluated against a JSON view of
//! the record. Callers pass the subset of field names they want checked,
//! which is what lets partial updates validate touched fields only.

use serde_json::{Map, Value};

use crate::error::FieldErrors;

/// A single declarable field constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The field must be present and non-null.
    Required,
    /// String fields only: minimum number of characters.
    MinLength(usize),
    /// Numeric fields only: inclusive lower bound.
    MinValue(f64),
}

/// One rule in the validation table: a field, its constraint, and the
/// message reported when the constraint is violated.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

/// Every field that carries at least one rule. `description` is
/// deliberately absent: it is optional and unconstrained.
pub const PRODUCT_FIELDS: &[&str] = &["name", "price", "stockQuantity"];

/// The declared constraints for a product, in evaluation order.
/// The first violated rule per field wins.
const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        constraint: Constraint::Required,
        message: "name must not be null",
    },
    FieldRule {
        field: "name",
        constraint: Constraint::MinLength(2),
        message: "name must be at least 2 characters",
    },
    FieldRule {
        field: "price",
        constraint: Constraint::Required,
        message: "price must not be null",
    },
    FieldRule {
        field: "price",
        constraint: Constraint::MinValue(0.0),
        message: "price must be at least 0",
    },
    FieldRule {
        field: "stockQuantity",
        constraint: Constraint::Required,
        message: "stock quantity must not be null",
    },
    FieldRule {
        field: "stockQuantity",
        constraint: Constraint::MinValue(0.0),
        message: "stock quantity must be at least 0",
    },
];

/// Evaluate the rules for the listed fields against a JSON view of the
/// record. Fields not in `fields` are skipped entirely, even if their
/// current value would violate a rule.
pub fn validate_fields(record: &Map<String, Value>, fields: &[&str]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for rule in PRODUCT_RULES {
        if !fields.contains(&rule.field) || errors.contains_key(rule.field) {
            continue;
        }
        if violates(&rule.constraint, record.get(rule.field)) {
            errors.insert(rule.field.to_string(), rule.message.to_string());
        }
    }

    errors
}

/// Evaluate the rules for every declared field.
pub fn validate_all(record: &Map<String, Value>) -> FieldErrors {
    validate_fields(record, PRODUCT_FIELDS)
}

fn violates(constraint: &Constraint, value: Option<&Value>) -> bool {
    match constraint {
        Constraint::Required => matches!(value, None | Some(Value::Null)),
        // MinLength and MinValue pass on absent or differently-typed
        // values; Required is the rule that enforces presence.
        Constraint::MinLength(min) => value
            .and_then(Value::as_str)
            .is_some_and(|s| s.chars().count() < *min),
        Constraint::MinValue(min) => value
            .and_then(Value::as_f64)
            .is_some_and(|n| n < *min),
    }
}
