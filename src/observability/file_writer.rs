//! Append-only line writer with size-based rotation.
//!
//! When the file grows past its size limit it is renamed to `<name>.1`
//! (replacing any earlier backup) and a fresh file is started.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, writing or flushing fails, or if
    /// the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            fs::rename(&self.file_path, self.backup_path())?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let Some(file) = writer.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    /// Path the current file is moved to on rotation.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".1");
        self.file_path.with_file_name(name)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
