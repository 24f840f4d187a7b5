use serde_json::Value;

use crate::error::InspectError;
use crate::models::feature::HISTORY_KEY;
use crate::models::{FeatureRecord, FeatureReport};
use crate::parsers::deserializers::decode_history;

/// Decode one feature line into the report printed for it
///
/// The `@history` property is decoded and then dropped from the returned
/// properties. All members are checked before returning, so an error means
/// nothing about this line should be printed.
///
/// The line goes through [`Value`] first, so a repeated key keeps its last
/// value instead of failing as a duplicate field.
///
/// # Errors
///
/// Returns an error if:
/// - The line is not a JSON object of the feature shape
/// - `properties`, `properties.@history`, `geometry`, `geometry.type`,
///   `geometry.coordinates` or the history's `objects` is missing
/// - `@history` is not a string, or does not contain valid JSON
pub fn parse_feature_line(line: &str) -> Result<FeatureReport, InspectError> {
    let value: Value = serde_json::from_str(line).map_err(InspectError::InvalidJson)?;
    let record: FeatureRecord =
        serde_json::from_value(value).map_err(InspectError::InvalidJson)?;

    let mut properties = record.properties.ok_or(InspectError::MissingField("properties"))?;
    // shift_remove keeps the remaining keys in source order
    let encoded_history = properties
        .shift_remove(HISTORY_KEY)
        .ok_or(InspectError::MissingField("properties.@history"))?;
    let history = decode_history(&encoded_history)?;

    let geometry = record.geometry.ok_or(InspectError::MissingField("geometry"))?;
    let geometry_type =
        geometry.geometry_type.ok_or(InspectError::MissingField("geometry.type"))?;
    let coordinates =
        geometry.coordinates.ok_or(InspectError::MissingField("geometry.coordinates"))?;
    let objects = history.objects.ok_or(InspectError::MissingField("@history.objects"))?;

    Ok(FeatureReport {
        properties,
        geometry_type,
        coordinate_count: coordinates.len(),
        history_object_count: objects.len(),
    })
}
