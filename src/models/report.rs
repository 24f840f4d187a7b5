use std::fmt;

use serde_json::{Map, Value};

const SEPARATOR: &str = "--------------------";

/// Facts printed for one oversized feature line
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport {
    /// Feature properties with `@history` already removed
    pub properties: Map<String, Value>,
    pub geometry_type: String,
    /// Top-level length of `geometry.coordinates`
    pub coordinate_count: usize,
    /// Number of keys in the history blob's `objects`
    pub history_object_count: usize,
}

impl fmt::Display for FeatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = serde_json::to_string(&self.properties).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", properties)?;
        writeln!(f, "geometry type:  {}", self.geometry_type)?;
        writeln!(f, "Points in coordinates:  {}", self.coordinate_count)?;
        writeln!(f, "Number of history objects:  {}", self.history_object_count)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f)
    }
}
