//! Response partitioner.
//!
//! Splits a backend response into the value stored under a highlight key
//! and everything else. The input is never mutated; the remainder is always
//! a fresh copy.

use carquery_protocols::FormatError;
use serde::Serialize;
use serde_json::Value;

/// A response split for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionedResponse {
    pub highlighted: Option<Value>,
    pub remainder: Value,
}

impl PartitionedResponse {
    /// Highlighted value as display text: strings verbatim, anything else
    /// pretty-printed.
    pub fn highlighted_text(&self) -> Option<String> {
        self.highlighted.as_ref().map(|value| match value {
            Value::String(s) => s.clone(),
            other => pretty(other),
        })
    }

    pub fn remainder_text(&self) -> String {
        pretty(&self.remainder)
    }
}

/// Partition an already-parsed response.
pub fn partition(response: &Value, highlight_key: &str) -> PartitionedResponse {
    match response {
        Value::Object(map) if map.contains_key(highlight_key) => {
            let mut remainder = map.clone();
            let highlighted = remainder.remove(highlight_key);
            PartitionedResponse {
                highlighted,
                remainder: Value::Object(remainder),
            }
        }
        Value::Object(_) | Value::Array(_) => PartitionedResponse {
            highlighted: None,
            remainder: response.clone(),
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            PartitionedResponse {
                highlighted: None,
                remainder: response.clone(),
            }
        }
    }
}

/// Parse raw text and partition it.
pub fn format_raw(raw: &str, highlight_key: &str) -> Result<PartitionedResponse, FormatError> {
    format_raw_bytes(raw.as_bytes(), highlight_key)
}

/// Parse raw bytes and partition them.
///
/// Bytes that are not UTF-8 are reported as invalid JSON.
pub fn format_raw_bytes(raw: &[u8], highlight_key: &str) -> Result<PartitionedResponse, FormatError> {
    if std::str::from_utf8(raw).is_ok_and(|text| text.trim().is_empty()) {
        return Err(FormatError::EmptyInput);
    }
    let value: Value = serde_json::from_slice(raw)?;
    Ok(partition(&value, highlight_key))
}

/// Pretty-print with two-space indentation.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod tests;
