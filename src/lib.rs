//! Feature Inspector - Dump oversized GeoJSON features from a line-delimited file
//!
//! Scans a file of newline-delimited GeoJSON features and, for every line longer
//! than a threshold, prints a short summary of the feature:
//!
//! - The feature properties, without the string-encoded `@history` blob
//! - The geometry type and the number of top-level coordinate entries
//! - The number of objects in the decoded `@history` blob
//!
//! # Example
//!
//! ```no_run
//! use feature_inspector::{InspectConfig, scan_file};
//!
//! let config = InspectConfig::default();
//! let summary = scan_file(&config, &mut std::io::stdout().lock())?;
//! println!("Inspected {} of {} lines", summary.lines_inspected, summary.lines_read);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod inspector;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::InspectError;
pub use inspector::{InspectConfig, ScanSummary, scan_file};
pub use models::FeatureReport;
pub use parsers::parse_feature_line;
