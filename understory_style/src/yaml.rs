// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! YAML decoding into [`RawValue`] trees.

use serde_yaml::Value;
use understory_style_value::{RawMap, RawValue};

use crate::error::ThemeError;

/// Parses YAML text into a raw value tree, keeping mapping order.
///
/// # Errors
///
/// Returns [`ThemeError::Decoding`] if the text is not valid YAML.
pub fn parse_yaml(text: &str) -> Result<RawValue, ThemeError> {
    let value: Value =
        serde_yaml::from_str(text).map_err(|error| ThemeError::Decoding(error.to_string()))?;
    Ok(convert(value))
}

fn convert(value: Value) -> RawValue {
    match value {
        Value::Null => RawValue::Null,
        Value::Bool(b) => RawValue::Bool(b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => RawValue::Int(i),
            (None, Some(f)) if n.is_f64() => RawValue::Float(f),
            _ => RawValue::String(n.to_string()),
        },
        Value::String(s) => RawValue::String(s),
        Value::Sequence(items) => RawValue::List(items.into_iter().map(convert).collect()),
        Value::Mapping(mapping) => RawValue::Map(
            mapping
                .into_iter()
                .map(|(key, value)| (key_string(key), convert(value)))
                .collect::<RawMap>(),
        ),
        Value::Tagged(tagged) => convert(tagged.value),
    }
}

fn key_string(key: Value) -> String {
    match key {
        Value::String(s) => s,
        other => convert(other).to_string(),
    }
}
