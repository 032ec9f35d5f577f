use crate::domain::model::BirthInput;
use crate::utils::error::{BaziError, Result};
use serde_json::{Map, Value};

/// Parse a calculate request body into a [`BirthInput`].
pub fn parse_birth_input(body: Option<&str>) -> Result<BirthInput> {
    let body = body
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| BaziError::InvalidRequest {
            message: "request body is required".to_string(),
        })?;

    let value: Value = serde_json::from_str(body).map_err(|e| BaziError::InvalidRequest {
        message: format!("body is not valid JSON: {}", e),
    })?;

    birth_input_from_value(&value)
}

pub fn birth_input_from_value(value: &Value) -> Result<BirthInput> {
    let fields = value.as_object().ok_or_else(|| BaziError::InvalidRequest {
        message: "body must be a JSON object".to_string(),
    })?;

    Ok(BirthInput {
        year: required_int(fields, "year")?,
        month: required_int(fields, "month")?,
        day: required_int(fields, "day")?,
        hour: optional_int(fields, "hour")?,
    })
}

fn required_int(fields: &Map<String, Value>, name: &str) -> Result<i64> {
    let value = fields.get(name).ok_or_else(|| BaziError::MissingField {
        field: name.to_string(),
    })?;
    coerce_int(name, value)
}

/// Only an absent key defaults; an explicit `null` is a conversion error.
fn optional_int(fields: &Map<String, Value>, name: &str) -> Result<Option<i64>> {
    fields.get(name).map(|v| coerce_int(name, v)).transpose()
}

/// Integers as-is, finite floats truncated toward zero, integer strings parsed.
pub fn coerce_int(field: &str, value: &Value) -> Result<i64> {
    let conversion_error = || BaziError::TypeConversion {
        field: field.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                let truncated = f.trunc();
                // i64::MAX as f64 rounds up to 2^63, which is itself out of range
                if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                    Ok(truncated as i64)
                } else {
                    Err(conversion_error())
                }
            } else {
                Err(conversion_error())
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| conversion_error()),
        _ => Err(conversion_error()),
    }
}
