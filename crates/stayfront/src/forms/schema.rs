//! The validation dispatcher shared by every form schema.
//!
//! A [`FormSchema`] is a declared-order list of per-field rules applied to an
//! untrusted flat record. Rules are evaluated in declaration order and every
//! violated rule contributes its configured message; the caller receives a
//! single [`FormValidationError`] whose message is the comma-joined
//! concatenation of those messages. There is no per-field error map and no
//! partial success.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Untrusted input: a flat mapping from field name to unvalidated value.
pub type RawRecord = Map<String, Value>;

/// The single failure kind raised by form validation.
///
/// The message aggregates every violated constraint, comma-joined in schema
/// declaration order. Field identity is not recoverable from the error
/// beyond the message text; callers needing per-field errors would require a
/// deliberate contract change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormValidationError {
    message: String,
}

impl FormValidationError {
    pub(crate) fn from_messages(messages: Vec<String>) -> Self {
        Self {
            message: messages.join(","),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single field-level constraint.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Field must be present as a string; no further bounds.
    Text,
    /// String with at least this many characters.
    MinChars(usize),
    /// String with at most this many characters.
    MaxChars(usize),
    /// Integer (coerced from a numeric string if needed) with a lower bound.
    IntAtLeast(i64),
    /// Integer (coerced from a numeric string if needed) within an inclusive range.
    IntBetween(i64, i64),
    /// String fully matching the pattern.
    Matches(Regex),
    /// String whose word count falls within an inclusive range.
    ///
    /// Words are counted by splitting on single spaces, matching the site's
    /// original form counter: leading, trailing, or consecutive spaces each
    /// add to the count.
    WordCountBetween(usize, usize),
}

/// One configured rule: a field name, a constraint, and the message surfaced
/// when the rule fails for any reason (missing field, wrong type, or an
/// out-of-bounds value).
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl FieldRule {
    pub fn new(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Self {
            field,
            constraint,
            message,
        }
    }
}

/// A named, ordered set of field rules defining a valid record shape.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: &'static str,
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Evaluate every rule in declaration order.
    ///
    /// On success returns the record with integer coercions materialized
    /// (numeric strings replaced by numbers); every other field passes
    /// through unchanged. On failure, the error message is the comma-joined
    /// list of every violated rule's message.
    pub fn check(&self, record: &RawRecord) -> Result<RawRecord, FormValidationError> {
        let mut validated = record.clone();
        let mut failures = Vec::new();

        for rule in &self.rules {
            match evaluate(&rule.constraint, record.get(rule.field)) {
                RuleOutcome::Pass => {}
                RuleOutcome::Coerced(value) => {
                    validated.insert(rule.field.to_string(), value);
                }
                RuleOutcome::Fail => failures.push(rule.message.to_string()),
            }
        }

        if failures.is_empty() {
            Ok(validated)
        } else {
            Err(FormValidationError::from_messages(failures))
        }
    }
}

/// Check a raw record against the schema and deserialize it into the typed
/// form record.
pub fn validate_form<T>(schema: &FormSchema, record: RawRecord) -> Result<T, FormValidationError>
where
    T: DeserializeOwned,
{
    let checked = schema.check(&record)?;
    serde_json::from_value(Value::Object(checked)).map_err(|err| {
        FormValidationError::from_messages(vec![format!(
            "{} payload does not match the schema shape: {err}",
            schema.name
        )])
    })
}

enum RuleOutcome {
    Pass,
    Coerced(Value),
    Fail,
}

fn evaluate(constraint: &Constraint, value: Option<&Value>) -> RuleOutcome {
    match constraint {
        Constraint::Text => match value {
            Some(Value::String(_)) => RuleOutcome::Pass,
            _ => RuleOutcome::Fail,
        },
        Constraint::MinChars(min) => check_string(value, |text| text.chars().count() >= *min),
        Constraint::MaxChars(max) => check_string(value, |text| text.chars().count() <= *max),
        Constraint::Matches(pattern) => check_string(value, |text| pattern.is_match(text)),
        Constraint::WordCountBetween(min, max) => check_string(value, |text| {
            let words = text.split(' ').count();
            words >= *min && words <= *max
        }),
        Constraint::IntAtLeast(min) => check_int(value, |number| number >= *min),
        Constraint::IntBetween(min, max) => {
            check_int(value, |number| number >= *min && number <= *max)
        }
    }
}

fn check_string<F>(value: Option<&Value>, predicate: F) -> RuleOutcome
where
    F: Fn(&str) -> bool,
{
    match value {
        Some(Value::String(text)) if predicate(text) => RuleOutcome::Pass,
        _ => RuleOutcome::Fail,
    }
}

fn check_int<F>(value: Option<&Value>, predicate: F) -> RuleOutcome
where
    F: Fn(i64) -> bool,
{
    match value.and_then(coerce_int) {
        Some(number) if predicate(number) => RuleOutcome::Coerced(Value::from(number)),
        _ => RuleOutcome::Fail,
    }
}

/// Numeric coercion applied before integer bounds: integers pass through and
/// numeric strings parse; anything else (floats, booleans, missing values)
/// fails the rule.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
