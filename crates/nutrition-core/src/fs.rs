//! Filesystem helpers for replacing snapshot files atomically.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `data` to `path` via a synced temp file in the same directory.
///
/// Creates the parent directory if needed. A crash mid-write leaves either
/// the old file or the new one, never a truncated mix.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid snapshot filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    let written = file.write_all(data).and_then(|_| file.sync_all());
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    replace_file(&temp_path, path)
}

/// Move `source` over `destination`.
///
/// Where rename refuses to overwrite (Windows), the destination is removed
/// and the rename retried. The source is cleaned up if both attempts fail.
pub fn replace_file(source: &Path, destination: &Path) -> io::Result<()> {
    if let Err(first) = fs::rename(source, destination) {
        let _ = fs::remove_file(destination);
        if let Err(second) = fs::rename(source, destination) {
            let _ = fs::remove_file(source);
            return Err(io::Error::new(
                second.kind(),
                format!("replace failed (first: {}, retry: {})", first, second),
            ));
        }
    }
    Ok(())
}
