//! Field validation for loosely-typed snapshot records
//!
//! Raw records keep their leaf values as `serde_json::Value`; these helpers
//! turn them into typed values with consistent error messages.

use crate::error::{Error, RecordLocation};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// What went wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
  Missing,
  InvalidType,
  Malformed,
}

/// A validation error with field information
#[derive(Debug, Clone, Error)]
pub struct ValidationError {
  pub field: String,
  pub kind: ValidationErrorKind,
  pub message: String,
  /// Offending raw value, rendered as text
  pub value: Option<String>,
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

impl ValidationError {
  /// Create error for missing required field
  pub fn missing(field: impl Into<String>) -> Self {
    let field = field.into();
    Self {
      message: format!("{} is required", field),
      kind: ValidationErrorKind::Missing,
      value: None,
      field,
    }
  }

  /// Create error for invalid type
  pub fn invalid_type(field: impl Into<String>, expected: &str, value: &Value) -> Self {
    Self {
      field: field.into(),
      kind: ValidationErrorKind::InvalidType,
      message: format!("expected {}", expected),
      value: Some(value.to_string()),
    }
  }

  /// Create error for a counter that is present but not a count
  pub fn malformed(field: impl Into<String>, raw: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      kind: ValidationErrorKind::Malformed,
      message: "expected a non-negative integer".to_string(),
      value: Some(raw.into()),
    }
  }

  /// Attach record context, producing the pipeline error
  pub fn at(self, location: RecordLocation) -> Error {
    match self.kind {
      ValidationErrorKind::Missing => Error::MissingKey {
        location,
        field: self.field,
      },
      ValidationErrorKind::InvalidType | ValidationErrorKind::Malformed => Error::MalformedRecord {
        location,
        field: self.field,
        value: self.value.unwrap_or_default(),
      },
    }
  }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a required identifier. Integer ids are accepted and rendered as text.
pub fn require_id(value: Option<&Value>, field: &str) -> ValidationResult<String> {
  match value {
    None | Some(Value::Null) => Err(ValidationError::missing(field)),
    Some(Value::String(s)) if s.is_empty() => Err(ValidationError::missing(field)),
    Some(Value::String(s)) => Ok(s.clone()),
    Some(Value::Number(n)) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
    Some(other) => Err(ValidationError::invalid_type(field, "string", other)),
  }
}

/// Validate an optional string field; missing or null maps to an empty string
pub fn optional_text(value: Option<&Value>, field: &str) -> ValidationResult<String> {
  match value {
    None | Some(Value::Null) => Ok(String::new()),
    Some(Value::String(s)) => Ok(s.clone()),
    Some(other) => Err(ValidationError::invalid_type(field, "string", other)),
  }
}

/// Validate an optional nested record. Missing or null is `None`; anything
/// that is not an object of the expected shape is an invalid type.
pub fn optional_record<T: DeserializeOwned>(value: Option<&Value>, field: &str) -> ValidationResult<Option<T>> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(v @ Value::Object(_)) => serde_json::from_value(v.clone())
      .map(Some)
      .map_err(|_| ValidationError::invalid_type(field, "object", v)),
    Some(other) => Err(ValidationError::invalid_type(field, "object", other)),
  }
}

/// Parse an interaction counter.
///
/// Missing, null and empty strings are 0. Strings may carry `,` thousands
/// separators. Anything else that is not a non-negative integer is malformed.
pub fn parse_counter(value: Option<&Value>, field: &str) -> ValidationResult<u64> {
  match value {
    None | Some(Value::Null) => Ok(0),
    Some(Value::String(s)) => parse_counter_str(s, field),
    Some(Value::Number(n)) => n
      .as_u64()
      .ok_or_else(|| ValidationError::malformed(field, n.to_string())),
    Some(other) => Err(ValidationError::invalid_type(field, "counter string", other)),
  }
}

/// Parse a counter from its text form
pub fn parse_counter_str(raw: &str, field: &str) -> ValidationResult<u64> {
  let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
  if cleaned.is_empty() {
    return Ok(0);
  }
  if !cleaned.chars().all(|c| c.is_ascii_digit()) {
    return Err(ValidationError::malformed(field, raw));
  }
  cleaned.parse::<u64>().map_err(|_| ValidationError::malformed(field, raw))
}
