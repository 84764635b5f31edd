//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write bytes to a file atomically using the write-then-rename pattern.
///
/// A partially written result file would be indistinguishable from a complete
/// fused ranking, so the content lands in a sibling `.tmp` file first and is
/// renamed into place (atomic on POSIX systems).
pub fn atomic_write_bytes(path: &Path, content: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
