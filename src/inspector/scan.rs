//! The scan loop over a line-delimited feature file.

use std::io::{BufReader, Write};

use anyhow::{Context, Result};

use crate::inspector::config::InspectConfig;
use crate::parsers::parse_feature_line;
use crate::utils::{exceeds_length, open_input_file, read_text_line};

/// Counters for one completed scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines_read: usize,
    pub lines_inspected: usize,
}

/// Scan the configured file and write a report for every oversized line
///
/// Lines are split on `\n`, `\r\n` or `\r`, keep their terminator as a single
/// `\n`, and are measured in characters.
/// A line longer than [`InspectConfig::line_length_threshold`] is decoded with
/// [`parse_feature_line`] and its report written to `out`; every other line is
/// skipped unparsed.
///
/// # Arguments
///
/// * `config` - Input path and length threshold
/// * `out` - Destination for the reports (stdout in the binary)
///
/// # Errors
///
/// Returns an error if:
/// - The input file cannot be opened or read (including invalid UTF-8)
/// - An oversized line fails to decode; the scan stops at that line
/// - Writing to `out` fails
///
/// # Examples
///
/// ```no_run
/// use feature_inspector::{InspectConfig, scan_file};
///
/// let config = InspectConfig::new("features.geojsonseq", 10_000);
/// let mut out: Vec<u8> = Vec::new();
/// let summary = scan_file(&config, &mut out)?;
/// assert!(summary.lines_inspected <= summary.lines_read);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn scan_file<W: Write>(config: &InspectConfig, out: &mut W) -> Result<ScanSummary> {
    let path = &config.input_path;
    let file = open_input_file(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let mut summary = ScanSummary::default();

    loop {
        line.clear();
        let line_num = summary.lines_read + 1;
        let bytes_read = read_text_line(&mut reader, &mut line)
            .with_context(|| format!("Failed to read line {} from {}", line_num, path.display()))?;
        if bytes_read == 0 {
            break;
        }
        summary.lines_read = line_num;

        if !exceeds_length(&line, config.line_length_threshold) {
            continue;
        }

        let report = parse_feature_line(&line)
            .with_context(|| format!("Failed to decode line {} in {}", line_num, path.display()))?;

        write!(out, "{}", report).context("Failed to write feature report")?;
        out.flush().context("Failed to flush feature report")?;
        summary.lines_inspected += 1;
    }

    Ok(summary)
}
