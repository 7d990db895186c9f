//! Response envelope normalization
//!
//! Agendor wraps results under `data`, but create endpoints have been seen
//! nesting the record under the entity name instead, or returning it bare.
//! All of that variance is absorbed here.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Outcome of a create call.
///
/// A duplicate-key rejection is an expected answer during find-or-create, so
/// it travels as a value instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome<T> {
    /// The CRM stored the record
    Created(T),
    /// The CRM already holds a record with the same natural key
    Conflict(String),
}

/// Extract a single record from a create/get response.
///
/// Precedence, first hit wins:
/// 1. `data` when it is an object
/// 2. first element of `data` when it is a non-empty array
/// 3. `<entity_key>` when it is an object (e.g. `organization`, `person`)
/// 4. the root object itself
pub fn extract_record<T: DeserializeOwned>(body: Value, entity_key: &str) -> Result<T, ApiError> {
    let record = match body {
        Value::Object(mut root) => match root.remove("data") {
            Some(Value::Object(data)) => Value::Object(data),
            Some(Value::Array(items)) if !items.is_empty() => {
                items.into_iter().next().unwrap_or(Value::Null)
            }
            data => match root.remove(entity_key) {
                Some(Value::Object(nested)) => Value::Object(nested),
                nested => {
                    // Nothing matched, hand back the root as it came
                    if let Some(v) = data {
                        root.insert("data".to_string(), v);
                    }
                    if let Some(v) = nested {
                        root.insert(entity_key.to_string(), v);
                    }
                    Value::Object(root)
                }
            },
        },
        other => {
            return Err(ApiError::InvalidResponse(format!(
                "Expected a JSON object for {}, got: {}",
                entity_key, other
            )));
        }
    };

    serde_json::from_value(record).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse {} record: {}", entity_key, e))
    })
}

/// Extract a list of records from a search/list response.
///
/// Accepts `{data: [...]}`, `{data: null}` and a bare array.
pub fn extract_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut root) => match root.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                return Err(ApiError::InvalidResponse(format!(
                    "Expected `data` to be a list, got: {}",
                    other
                )));
            }
        },
        Value::Null => Vec::new(),
        other => {
            return Err(ApiError::InvalidResponse(format!(
                "Expected a list response, got: {}",
                other
            )));
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item)
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse record: {}", e)))
        })
        .collect()
}
