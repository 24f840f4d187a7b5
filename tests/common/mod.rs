//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for a working directory containing the `tmp2` input file
pub struct InputDirBuilder {
    temp_dir: TempDir,
}

impl InputDirBuilder {
    /// Create a new builder with an empty temp directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the input file inside the directory
    pub fn input_path(&self) -> PathBuf {
        self.temp_dir.path().join("tmp2")
    }

    /// Write `tmp2` with the given raw content
    pub fn with_input(self, content: &str) -> Self {
        fs::write(self.input_path(), content).expect("Failed to write tmp2");
        self
    }

    /// Write `tmp2` with one line per entry, each terminated by a newline
    pub fn with_lines(self, lines: &[String]) -> Self {
        let content = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        self.with_input(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for InputDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one GeoJSON feature line carrying a string-encoded `@history`
#[derive(Clone)]
pub struct FeatureLineBuilder {
    properties: Map<String, Value>,
    geometry_type: String,
    coordinates: Value,
    history_objects: usize,
    filler: Option<usize>,
}

impl FeatureLineBuilder {
    /// A Polygon with three coordinate entries and two history objects
    pub fn new() -> Self {
        Self {
            properties: Map::new(),
            geometry_type: "Polygon".to_string(),
            coordinates: json!([[0, 0], [1, 1], [2, 2]]),
            history_objects: 2,
            filler: None,
        }
    }

    /// Add a string property (kept in insertion order)
    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Set the geometry type
    pub fn geometry_type(mut self, geometry_type: &str) -> Self {
        self.geometry_type = geometry_type.to_string();
        self
    }

    /// Set the raw coordinates value
    pub fn coordinates(mut self, coordinates: Value) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Set the number of objects in the history topology
    pub fn history_objects(mut self, count: usize) -> Self {
        self.history_objects = count;
        self
    }

    /// Append a `filler` property holding `len` characters
    pub fn filler(mut self, len: usize) -> Self {
        self.filler = Some(len);
        self
    }

    /// Encode the history topology the way the producing pipeline does
    fn history_string(&self) -> String {
        let objects: Map<String, Value> = (0..self.history_objects)
            .map(|i| (format!("w{}", i), json!({"type": "LineString", "arcs": [i]})))
            .collect();
        json!({"type": "Topology", "objects": objects, "arcs": []}).to_string()
    }

    /// Convert to a single JSON line (no trailing newline)
    pub fn to_json(&self) -> String {
        let mut properties = self.properties.clone();
        properties.insert("@history".to_string(), Value::String(self.history_string()));
        if let Some(len) = self.filler {
            properties.insert("filler".to_string(), Value::String("x".repeat(len)));
        }

        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {"type": self.geometry_type, "coordinates": self.coordinates},
        })
        .to_string()
    }

    /// Convert to a JSON line of exactly `len` characters, padded via `filler`
    pub fn to_json_with_len(&self, len: usize) -> String {
        let base = self.clone().filler(0).to_json().chars().count();
        assert!(base <= len, "feature needs at least {} characters", base);
        let line = self.clone().filler(len - base).to_json();
        assert_eq!(line.chars().count(), len);
        line
    }
}

impl Default for FeatureLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
