use std::path::PathBuf;

/// Input file read by the binary, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "tmp2";

/// Lines longer than this many characters get inspected
pub const DEFAULT_LINE_LENGTH_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub input_path: PathBuf,
    pub line_length_threshold: usize,
}

impl InspectConfig {
    pub fn new(input_path: impl Into<PathBuf>, line_length_threshold: usize) -> Self {
        Self { input_path: input_path.into(), line_length_threshold }
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_LINE_LENGTH_THRESHOLD)
    }
}
