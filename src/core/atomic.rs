//! Atomic file writes.
//!
//! Every on-disk mutation goes through [`write_atomic`]: the bytes land in a
//! uniquely named temporary file in the target directory, then replace the
//! target in a single rename. A crash mid-write never leaves a half-written
//! file behind, and concurrent writers cannot observe each other's partial
//! output (the last successful rename wins).

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `bytes` to `path`, replacing any existing file atomically.
///
/// Creates parent directories as needed. The temporary file lives in the same
/// directory as `path` so the final rename stays on one filesystem.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => {
            fs::create_dir_all(p)?;
            p
        }
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Restrict a file to owner read/write (0600). No-op off Unix.
#[cfg(unix)]
pub fn set_owner_only(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
pub fn set_owner_only(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
