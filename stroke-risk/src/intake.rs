//! Lenient request intake
//!
//! Turns a loosely-typed JSON request into [`PatientAttributes`]. Missing or
//! malformed fields fall back to their defaults instead of failing, so the
//! scorer only ever sees a complete record. Only an unparsable body, or a body
//! that is not a JSON object, is rejected.

use crate::{Error, PatientAttributes, Result, SmokingStatus};
use serde_json::{Map, Value};

/// Parse a raw request body into patient attributes
pub fn parse_request_body(body: &[u8]) -> Result<PatientAttributes> {
    let value: Value = serde_json::from_slice(body)?;
    PatientAttributes::from_json(&value)
}

impl PatientAttributes {
    /// Coerce a parsed JSON value; anything but an object is rejected
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::from_json_object(fields)),
            other => Err(Error::NotAnObject(json_kind(other))),
        }
    }

    /// Coerce a JSON object field by field. Never fails.
    pub fn from_json_object(fields: &Map<String, Value>) -> Self {
        Self {
            age: measurement(fields.get("age")),
            bmi: measurement(fields.get("bmi")),
            hypertension: flag(fields.get("hypertension")),
            heart_disease: flag(fields.get("heart_disease")),
            avg_glucose_level: measurement(fields.get("avg_glucose_level")),
            smoking_status: smoking_status(fields.get("smoking_status")),
        }
    }
}

/// Numeric reading of a field, if it has one
fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        // Literal text, so out-of-range values saturate to +/-inf instead of failing
        Value::Number(n) => n.to_string().parse::<f64>().ok(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Non-negative measurement, 0 otherwise. `+inf` is kept; the scorer clamps it.
fn measurement(value: Option<&Value>) -> f64 {
    match as_number(value) {
        Some(n) if n >= 0.0 => n,
        _ => 0.0,
    }
}

/// Flags are integer-valued; fractions truncate toward zero
fn flag(value: Option<&Value>) -> bool {
    matches!(as_number(value), Some(n) if !n.is_nan() && n.trunc() != 0.0)
}

fn smoking_status(value: Option<&Value>) -> SmokingStatus {
    match value {
        Some(Value::String(label)) => SmokingStatus::from_label(label),
        _ => SmokingStatus::Unknown,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
