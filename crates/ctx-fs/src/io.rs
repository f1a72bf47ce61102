//! Atomic I/O operations with file locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Write content atomically to a file with locking.
///
/// Writes to a sibling temp file and renames it over the target, so readers
/// never observe a partial file. The temp file is removed if the rename fails.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    tracing::trace!(path = %path, bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content if the file exists, `None` otherwise.
pub fn read_text_opt(path: &NormalizedPath) -> Result<Option<String>> {
    match fs::read_to_string(path.to_native()) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path.to_native(), e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a directory and all of its parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join(".agent/workflows/a.md");

        write_text(&path, "hello").unwrap();

        assert_eq!(read_text(&path).unwrap(), "hello");
    }

    #[test]
    fn write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("a.md");

        write_text(&path, "old").unwrap();
        write_text(&path, "new").unwrap();

        assert_eq!(read_text(&path).unwrap(), "new");
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        // A directory in the way makes the rename fail
        fs::create_dir_all(temp.path().join("blocked.md")).unwrap();
        std::fs::write(temp.path().join("blocked.md/inner"), "x").unwrap();

        let result = write_text(&root.join("blocked.md"), "content");

        assert!(result.is_err());
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
    }

    #[test]
    fn read_text_opt_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("missing.md");
        assert!(read_text_opt(&path).unwrap().is_none());
    }
}
