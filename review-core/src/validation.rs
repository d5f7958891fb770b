//! Field-level validation primitives
//!
//! Each check returns the first failing message for a single field; the
//! caller collects them into [`ValidationErrors`] so every invalid field is
//! reported in one response.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Error messages surfaced to API clients
pub mod messages {
    pub const REQUIRED: &str = "This field is required.";
    pub const NULL: &str = "This field may not be null.";
    pub const BLANK: &str = "This field may not be blank.";
    pub const INVALID_STRING: &str = "Not a valid string.";
    pub const INVALID_INTEGER: &str = "A valid integer is required.";
    pub const SERVER_ASSIGNED: &str = "This field is set by the server and cannot be supplied.";

    pub fn max_length(max: usize) -> String {
        format!("Ensure this field has no more than {} characters.", max)
    }

    pub fn min_value(min: i64) -> String {
        format!("Ensure this value is greater than or equal to {}.", min)
    }

    pub fn max_value(max: i64) -> String {
        format!("Ensure this value is less than or equal to {}.", max)
    }

    pub fn expected_object(kind: &str) -> String {
        format!("Invalid data. Expected a dictionary, but got {}.", kind)
    }
}

/// Key used for errors that do not belong to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation failures keyed by field name
///
/// Serializes as `{ "field": ["message", ...], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of every field with at least one message
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Store the field's value on success or its message on failure
    pub fn collect<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Name of a JSON value's type, as reported in error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Validate a required text field
///
/// Numbers are accepted and rendered as text. Surrounding whitespace is
/// trimmed before the blank and length checks; length counts characters.
pub fn required_text(value: Option<&Value>, max_len: usize) -> Result<String, String> {
    let text = match value {
        None => return Err(messages::REQUIRED.to_string()),
        Some(Value::Null) => return Err(messages::NULL.to_string()),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(messages::INVALID_STRING.to_string()),
    };

    if text.is_empty() {
        return Err(messages::BLANK.to_string());
    }

    if text.chars().count() > max_len {
        return Err(messages::max_length(max_len));
    }

    Ok(text)
}

/// Validate a required integer field within `min..=max`
pub fn required_integer(value: Option<&Value>, min: i64, max: i64) -> Result<i64, String> {
    let number = match value {
        None => return Err(messages::REQUIRED.to_string()),
        Some(Value::Null) => return Err(messages::NULL.to_string()),
        Some(value) => coerce_integer(value).ok_or_else(|| messages::INVALID_INTEGER.to_string())?,
    };

    if number < min {
        return Err(messages::min_value(min));
    }
    if number > max {
        return Err(messages::max_value(max));
    }

    Ok(number)
}

/// Interpret a JSON value as an integer
///
/// Accepts integers, floats with no fractional part, and strings holding
/// either. Booleans are not integers.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => parse_integer_text(s),
        _ => None,
    }
}

fn parse_integer_text(text: &str) -> Option<i64> {
    let text = text.trim();
    let digits = match text.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => text,
    };
    digits.parse().ok()
}
