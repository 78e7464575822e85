//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where application data, configuration and log files live.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, expand_tilde, log_file};
