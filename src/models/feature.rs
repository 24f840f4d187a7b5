use serde::Deserialize;
use serde_json::{Map, Value};

/// Key under which the producing pipeline stores the string-encoded history
pub const HISTORY_KEY: &str = "@history";

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRecord {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Vec<Value>>,
}

/// Decoded `@history` document
///
/// In practice a TopoJSON topology; only its `objects` member is read.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryBlob {
    #[serde(default)]
    pub objects: Option<Map<String, Value>>,
}
