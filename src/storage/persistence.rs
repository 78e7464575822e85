//! Persistence adapter for the application collection.
//!
//! Serializes the full collection as a compact JSON array under a single fixed
//! key. Loading is forgiving: an absent key, an unreadable backend or text that
//! is not an array of records all yield an empty collection.

use crate::domain::error::{Result, TrackerError};
use crate::domain::JobApplication;
use crate::storage::backend::Storage;

/// Fixed key the collection is stored under.
pub const STORAGE_KEY: &str = "job-tracker-items-v1";

/// Loads the persisted collection, falling back to an empty one.
///
/// Never fails: read errors and corrupt data are logged and swallowed.
///
/// # Examples
///
/// ```
/// use jobtracker::storage::{load_applications, MemoryStorage, STORAGE_KEY};
///
/// let storage = MemoryStorage::with_item(STORAGE_KEY, "{ definitely not an array");
/// assert!(load_applications(&storage).is_empty());
/// ```
pub fn load_applications<S: Storage + ?Sized>(storage: &S) -> Vec<JobApplication> {
    let _span = tracing::debug_span!("load_applications", key = STORAGE_KEY).entered();

    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("nothing stored yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored applications, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<JobApplication>>(&raw) {
        Ok(applications) => {
            tracing::debug!(count = applications.len(), "loaded applications");
            applications
        }
        Err(e) => {
            tracing::warn!(error = %e, bytes = raw.len(), "stored applications are corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Serializes and writes the full collection.
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails.
pub fn save_applications<S: Storage + ?Sized>(
    storage: &mut S,
    applications: &[JobApplication],
) -> Result<()> {
    let _span = tracing::debug_span!("save_applications", count = applications.len()).entered();

    let json = serde_json::to_string(applications)
        .map_err(|e| TrackerError::Storage(format!("failed to serialize JSON: {e}")))?;

    storage.set_item(STORAGE_KEY, &json)?;

    tracing::debug!(bytes = json.len(), "applications saved");
    Ok(())
}
