//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a small key/value interface modelled
//! on browser local storage. Values are opaque text; interpreting them is the job
//! of [`crate::storage::persistence`]. Keeping the trait this narrow lets the store
//! run against a real directory or a plain in-memory map without any change in
//! business logic.

use crate::domain::error::Result;

/// Abstraction over persistent key/value backends.
///
/// # Implementations
///
/// - [`crate::storage::FileStorage`]: one file per key with atomic writes (default)
/// - [`crate::storage::MemoryStorage`]: in-memory map for tests and embedding
///
/// # Examples
///
/// ```
/// use jobtracker::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// storage.set_item("greeting", "hello")?;
/// assert_eq!(storage.get_item("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), jobtracker::TrackerError>(())
/// ```
pub trait Storage: Send {
    /// Reads the raw text stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Implementations must not leave a
    /// partially written value behind.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
