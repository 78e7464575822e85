//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to a plain-text fmt layer that writes into a
//! rotating log file in the data directory.

use super::file_writer::FileWriter;
use crate::infrastructure::log_file;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive.
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable, when set and non-empty
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
fn filter_directive(config: &Config, rust_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Initializes the tracing subscriber with a rotating file writer.
///
/// Logs are written to `<data_dir>/jobtracker.log`, which rotates at 10 MB
/// with three backups kept. Terminal output is never touched.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use jobtracker::observability::init_tracing;
/// use jobtracker::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config, dir.path());
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config, data_dir: &Path) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let directive = filter_directive(config, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file(data_dir)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_config() {
        let config = Config {
            trace_level: Some("warn".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_directive(&config, Some("trace".into())), "trace");
        assert_eq!(filter_directive(&config, Some("  ".into())), "warn");
        assert_eq!(filter_directive(&config, None), "warn");
        assert_eq!(filter_directive(&Config::default(), None), "info");
    }
}
