//! Line scanning for oversized GeoJSON features
//!
//! # Error Handling Strategy
//!
//! The scan is a single fail-fast pass:
//!
//! - **Short lines**: Lines within the length threshold are skipped without
//!   being parsed, so junk in short lines never fails a run.
//!
//! - **Oversized lines**: Each one must decode completely. The first failure
//!   stops the scan and is returned with the file name and line number attached.
//!
//! - **Output**: Reports are written and flushed one line at a time, so output
//!   for lines before a failure is kept.

pub mod config;
pub mod scan;

pub use config::{DEFAULT_INPUT_FILE, DEFAULT_LINE_LENGTH_THRESHOLD, InspectConfig};
pub use scan::{ScanSummary, scan_file};
