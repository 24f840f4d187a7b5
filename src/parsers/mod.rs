//! Decoders for line-delimited GeoJSON features
//!
//! # Error Handling Strategy
//!
//! Unlike a tolerant log reader, this inspector is a debugging tool for one
//! specific dataset, so decoding is **strict**:
//!
//! - **Any failure is fatal**: malformed JSON, a missing member, or a history
//!   blob that does not decode stops the scan at that line.
//!
//! - **Typed failures**: decoders return [`crate::InspectError`], so callers can tell
//!   a missing field from broken JSON. The scan loop wraps these with
//!   `anyhow` context naming the file and line.
//!
//! - **No partial output**: a line is fully decoded into a
//!   [`crate::FeatureReport`] before anything is printed for it.

pub mod deserializers;
pub mod feature;

pub use deserializers::decode_history;
pub use feature::parse_feature_line;
