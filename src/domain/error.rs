//! Error types for the job tracker.
//!
//! This module defines the centralized error type [`TrackerError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Corrupt or missing persisted data is deliberately *not* an error: the
//! persistence adapter replaces it with an empty collection. The variants here
//! cover write failures, configuration problems and bad user input at the
//! front-end boundary.

use thiserror::Error;

/// The main error type for job tracker operations.
///
/// # Examples
///
/// ```
/// use jobtracker::domain::TrackerError;
///
/// fn parse_config() -> Result<(), TrackerError> {
///     Err(TrackerError::Config("expected a table".to_string()))
/// }
/// assert!(parse_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Storage backend rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme could not be found, read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration file is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Text did not name one of the four application statuses.
    #[error("Invalid status '{0}' (expected Applied, Interview, Offer or Rejected)")]
    InvalidStatus(String),

    /// No application matches the given id or id prefix.
    #[error("No application matches '{0}'")]
    UnknownApplication(String),

    /// An id prefix matches more than one application.
    #[error("Id prefix '{0}' matches more than one application")]
    AmbiguousId(String),
}

/// A specialized `Result` type for job tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
