//! Domain layer for the job tracker.
//!
//! This module contains the core domain types, independent of storage backends
//! and the terminal front end.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`application`]: Job application record, statuses and filters
//!
//! # Examples
//!
//! ```
//! use jobtracker::domain::{NewApplication, Status};
//!
//! let draft = NewApplication::new("Sky", "Junior Data Analyst").with_status(Status::Interview);
//! assert_eq!(draft.status, Status::Interview);
//! ```

pub mod application;
pub mod error;

pub use application::{today, JobApplication, NewApplication, Status, StatusFilter, SHORT_ID_LEN};
pub use error::{Result, TrackerError};
