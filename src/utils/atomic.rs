//! Atomic file write operations.
//!
//! A temp file is created next to the target and renamed over it, so readers
//! see either the old content or the new content, never a partial write.
//! Temp files are cleaned up automatically on failure.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// # Errors
///
/// Returns an `io::Error` if:
/// - The parent directory cannot be determined
/// - The temp file cannot be created
/// - Writing to the temp file fails
/// - The atomic rename fails
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?;

    // Same directory as the target, so the rename cannot cross filesystems
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    // Consumes the NamedTempFile, preventing auto-deletion
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
