// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Marker rendered in place of a value that can't be computed.
pub(crate) const NOT_AVAILABLE: &str = "-";

/// Parses a coin amount rendered as text, treating anything that isn't a finite number as `0`.
pub(crate) fn parse_amount_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            debug!("could not parse '{raw}' as a coin amount - assuming 0");
            0.0
        }
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Renders the value with exactly two decimal places, rounding exact ties away from zero
/// (`0.125` becomes `"0.13"`) rather than to even.
pub(crate) fn format_two_decimals(value: f64) -> String {
    // an exact tie at the second decimal place is only possible for odd multiples of 1/8
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;

    let value = if is_tie {
        (value * 100.0).round() / 100.0
    } else {
        value
    };

    // avoid rendering "-0.00"
    if value == 0.0 {
        return "0.00".to_string();
    }
    format!("{value:.2}")
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn value_as_string(value: Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Accepts a JSON number or a numeric string; anything else becomes `None`.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Accepts only a JSON number; strings, objects and the like become `None`.
pub(crate) fn de_json_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite()))
}

/// Accepts a string or a scalar that can be rendered as one.
pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_as_string))
}

/// Like [`de_lenient_string`], but with anything unusable read as an empty string.
pub(crate) fn de_lenient_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_lenient_string(deserializer)?.unwrap_or_default())
}
