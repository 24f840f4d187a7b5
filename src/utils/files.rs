use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Open the input file read-only and make sure it is a regular file
///
/// The check runs against the open handle's metadata rather than the path,
/// so the file cannot be swapped between the check and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (missing, permission denied)
/// - The file metadata cannot be read
/// - The path points to a directory or other non-regular file
pub fn open_input_file(path: &Path) -> Result<File> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Input is not a regular file: {}", path.display());
    }

    Ok(file)
}
