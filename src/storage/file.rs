//! File-based storage backend.
//!
//! Each key is stored as its own file, `<dir>/<key>.json`, inside the data
//! directory. Writes go to a temporary file first and are renamed into place so a
//! crash never leaves a half-written value behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: reads the whole value from disk on each call
//! - **Write**: O(n) in the value size, one rename per write
//! - **Best for**: a handful of keys holding small JSON documents

use crate::domain::error::{Result, TrackerError};
use crate::storage::backend::Storage;
use std::path::{Path, PathBuf};

/// Extension appended to every key file.
const VALUE_EXTENSION: &str = "json";

/// Directory-backed key/value storage.
///
/// # Thread Safety
///
/// This type is `Send` but performs no locking; it expects a single owner, which
/// matches the single-threaded store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per key.
    dir: PathBuf,
}

impl FileStorage {
    /// Opens a storage directory, creating it (and its parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jobtracker::storage::FileStorage;
    ///
    /// let storage = FileStorage::new("/tmp/jobtracker")?;
    /// # Ok::<(), jobtracker::TrackerError>(())
    /// ```
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(dir = ?dir, "initializing file storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the values live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] for an empty key or one with characters
    /// outside `[A-Za-z0-9._-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let name = validate_key(key)?;
        Ok(self.dir.join(format!("{name}.{VALUE_EXTENSION}")))
    }
}

/// Checks that `key` is usable as a file stem: non-empty and only `[A-Za-z0-9._-]`.
///
/// Keys are never rewritten, so two distinct keys can't end up in the same file.
fn validate_key(key: &str) -> Result<&str> {
    if key.is_empty() {
        return Err(TrackerError::Storage("storage key must not be empty".to_string()));
    }

    match key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        Some(bad) => Err(TrackerError::Storage(format!(
            "storage key {key:?} contains unsupported character {bad:?}"
        ))),
        None => Ok(key),
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("file_get_item", key = %key).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "value loaded");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no value stored");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("file_set_item", key = %key, bytes = value.len()).entered();

        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("value saved");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("file_remove_item", key = %key).entered();

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
