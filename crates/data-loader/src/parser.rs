//! Parser for the candidate JSON payload.
//!
//! The payload must be a JSON array; anything else fails the load. Elements
//! are decoded one at a time and never fail it:
//! - objects are decoded into [`Candidate`]; a field of the wrong type is
//!   logged and treated as absent, the rest of the record is kept
//! - non-object elements (`null`, numbers, strings) become an empty record,
//!   which is counted by the stats but never passes the filter

use crate::error::{DataLoadError, Result};
use crate::types::{Candidate, CandidateSet, Skills};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Decode a raw payload into the authoritative set
pub fn parse_candidates(payload: &[u8]) -> Result<CandidateSet> {
    let value: Value = serde_json::from_slice(payload)?;
    parse_candidates_value(value)
}

/// Same as [`parse_candidates`] for an already-decoded JSON value
pub fn parse_candidates_value(value: Value) -> Result<CandidateSet> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DataLoadError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    let candidates = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect();

    Ok(CandidateSet::from_candidates(candidates))
}

/// Decode one array element; never fails
fn parse_record(index: usize, item: Value) -> Candidate {
    let mut fields = match item {
        Value::Object(fields) => fields,
        other => {
            warn!(
                "Candidate record at index {} is {}, keeping it as an empty record",
                index,
                json_kind(&other)
            );
            return Candidate::default();
        }
    };

    // Well-formed records decode in one pass
    if let Ok(candidate) = Candidate::deserialize(&Value::Object(fields.clone())) {
        return candidate;
    }

    if let Some(Value::Object(skills)) = fields.get_mut("skills") {
        drop_invalid_fields::<Skills>(index, "skills.", skills);
    }
    drop_invalid_fields::<Candidate>(index, "", &mut fields);

    Candidate::deserialize(&Value::Object(fields)).unwrap_or_else(|e| {
        warn!(
            "Candidate record at index {} could not be decoded ({}), keeping it as an empty record",
            index, e
        );
        Candidate::default()
    })
}

/// Remove every field of `fields` that `T` rejects on its own.
///
/// Each field is checked in isolation, so one bad value only costs that
/// value. `T` must tolerate missing keys (all fields `#[serde(default)]`).
fn drop_invalid_fields<T: DeserializeOwned>(
    index: usize,
    prefix: &str,
    fields: &mut Map<String, Value>,
) {
    fields.retain(|key, value| {
        let mut single = Map::new();
        single.insert(key.clone(), value.clone());
        match T::deserialize(&Value::Object(single)) {
            Ok(_) => true,
            Err(e) => {
                warn!(
                    "Candidate record at index {} has an invalid {}{} field ({}), treating it as absent",
                    index, prefix, key, e
                );
                false
            }
        }
    });
}

/// Human-readable JSON type name for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
