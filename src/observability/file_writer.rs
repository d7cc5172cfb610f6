//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for trace files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Default maximum file size before rotation (5 MB).
const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of backup files to retain after rotation.
const DEFAULT_MAX_BACKUP_FILES: usize = 2;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit, it is renamed with a
/// timestamp suffix and a new file is created. Old backups beyond the
/// retention limit are removed.
///
/// An internal `Mutex` serializes writes, so multiple threads can share one
/// `FileWriter` instance. The file opens lazily on first write.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Size threshold that triggers rotation.
    max_size_bytes: u64,
    /// Number of rotated backups to keep.
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default rotation limits (5 MB, 2 backups).
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(
            file_path,
            DEFAULT_MAX_FILE_SIZE_BYTES,
            DEFAULT_MAX_BACKUP_FILES,
        )
    }

    /// Creates a writer with explicit rotation limits.
    pub const fn with_limits(file_path: PathBuf, max_size_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_size_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Writes a single line to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. The line is
    /// written with a trailing newline and flushed to disk immediately.
    ///
    /// # Errors
    ///
    /// May fail due to:
    /// - File system permissions
    /// - Disk space exhaustion
    /// - Mutex poisoning (if another thread panicked while holding the lock)
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "No file available")
        })?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Closes the handle and rotates once the size limit is exceeded.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Backups are named `<original_name>.json.<unix_timestamp>`, for
    /// example `petid-otlp.json.1234567890`.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes backup files beyond the retention limit.
    ///
    /// Scans the directory for files matching `<name>.json.*`, keeps the
    /// newest `max_backups` by modification time, and deletes the rest.
    /// Individual deletion failures are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self.file_path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "No parent directory")
        })?;

        let file_stem = self.file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name")
            })?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size_bytes", &self.max_size_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_and_creates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").expect("write");
        writer.write_line("{\"b\":2}").expect("write");

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_the_size_limit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("traces.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        writer.write_line("{\"long\":\"enough\"}").expect("write");
        // Over the 8-byte limit now; the next write rotates first.
        writer.write_line("{\"n\":2}").expect("write");

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "{\"n\":2}\n");

        let backups = fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.contains(".json."))
            })
            .count();
        assert_eq!(backups, 1);
    }
}
