//! Append-only line writer with size-based rotation.
//!
//! When the file grows past its size limit it is renamed to
//! `<name>.<UTC timestamp>` and a fresh file is started. Only the newest
//! backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds 10 MB.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer with the default 10 MB / 3 backup limits.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails if the lock is poisoned or on any filesystem error.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes);
        if oversized {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn file_name(&self) -> io::Result<&str> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "trace file has no name"))
    }

    fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn rotate(&self) -> io::Result<()> {
        let name = self.file_name()?;
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9f").to_string();

        let mut backup = self.parent().join(format!("{name}.{stamp}"));
        let mut attempt = 1;
        while backup.exists() {
            backup = self.parent().join(format!("{name}.{stamp}-{attempt}"));
            attempt += 1;
        }

        fs::rename(&self.path, &backup)?;
        self.prune_backups()
    }

    /// Paths of existing backups, oldest first.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(self.parent())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.max_backups);

        for old in &backups[..excess] {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = %old.display(), error = %e, "failed to remove old trace backup");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn oversized_file_rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 10, 2);

        for i in 0..5 {
            writer.write_line(&format!("line number {i}")).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line number 2\n");
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "line number 3\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 4\n");
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("trace.jsonl"), "x").unwrap();
        fs::write(dir.path().join("other.json.1"), "x").unwrap();

        let writer = RotatingFile::new(dir.path().join("trace.json"));
        assert!(writer.backups().unwrap().is_empty());
    }
}
