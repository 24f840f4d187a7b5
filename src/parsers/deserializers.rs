use serde_json::Value;

use crate::error::InspectError;
use crate::models::HistoryBlob;

/// Decode the string-encoded `@history` property into a [`HistoryBlob`]
///
/// The producing pipeline stores the history as a JSON document serialized
/// into a string, so the value has to be a string and its contents valid JSON.
/// Repeated keys inside the document keep their last value.
pub fn decode_history(value: &Value) -> Result<HistoryBlob, InspectError> {
    let Value::String(encoded) = value else {
        return Err(InspectError::HistoryNotString);
    };
    let document: Value = serde_json::from_str(encoded).map_err(InspectError::InvalidHistory)?;
    serde_json::from_value(document).map_err(InspectError::InvalidHistory)
}
