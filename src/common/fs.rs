//! Common file system operations with unified error handling
//!
//! Files are always read and written whole. Writes go through a temporary
//! file in the target's directory which is then renamed over the target, so
//! an interrupted write never leaves a half-written configuration behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{self, Result};

/// Read a UTF-8 text file. A missing file reads as empty text.
pub fn read_text(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file missing, treating as empty");
            Ok(String::new())
        }
        Err(e) => Err(error::fs::read_failed(
            path.display().to_string(),
            e.to_string(),
        )),
    }
}

/// Replace a file's content atomically.
///
/// The temporary file inherits the permissions of the file it replaces.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |reason: String| error::fs::write_failed(path.display().to_string(), reason);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| write_err(e.to_string()))?;
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    tmp.write_all(content.as_bytes()).map_err(|e| write_err(e.to_string()))?;
    tmp.as_file().sync_all().map_err(|e| write_err(e.to_string()))?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(|e| write_err(e.to_string()))?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error.to_string()))?;
    info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
