//! Data models for line-delimited GeoJSON features.
//!
//! - [`FeatureRecord`] - One decoded input line
//! - [`Geometry`] - The `geometry` member of a feature
//! - [`HistoryBlob`] - The document stored as a string in `properties["@history"]`
//! - [`FeatureReport`] - The facts printed for an oversized line
//!
//! Every field read by the inspector is optional at the serde level so that a
//! missing key surfaces as [`crate::InspectError::MissingField`] instead of a
//! generic decode error.

pub mod feature;
pub mod report;

pub use feature::{FeatureRecord, Geometry, HistoryBlob};
pub use report::FeatureReport;
