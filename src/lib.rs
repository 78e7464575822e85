//! jobtracker: a personal job-application tracker for the terminal.
//!
//! jobtracker keeps a list of job applications (company, role, date applied
//! and a status of Applied, Interview, Offer or Rejected) and provides:
//! - Adding, re-classifying, removing and clearing applications
//! - Filtering by status chip with live per-status counts
//! - Case-insensitive search across company, role and status
//! - Write-through persistence as a JSON array in a local data directory

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI front end (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Store + views
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - Key/value   │
//! │ - Theming     │   │ - JSON codec  │
//! │ - Components  │   │ - File/memory │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Application model (domain/application)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/jobtracker/config.toml` on Linux):
//!
//! ```toml
//! data_dir = "~/.local/share/jobtracker"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! confirm_clear = true
//! ```
//!
//! `JOBTRACKER_DATA_DIR`, `JOBTRACKER_THEME` and `JOBTRACKER_LOG` override the
//! file; command-line flags override both.
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::{AppState, ApplicationStore};
//! use jobtracker::storage::MemoryStorage;
//! use jobtracker::{handle_event, Event, NewApplication, Theme};
//!
//! let store = ApplicationStore::open(MemoryStorage::default());
//! let mut state = AppState::new(store, Theme::default());
//!
//! let (render, _actions) = handle_event(
//!     &mut state,
//!     &Event::AddApplication(NewApplication::new("Acme", "Data Analyst")),
//! )?;
//! assert!(render);
//! assert_eq!(state.store.len(), 1);
//! # Ok::<(), jobtracker::TrackerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, ApplicationStore, Event};
pub use domain::{JobApplication, NewApplication, Result, Status, StatusFilter, TrackerError};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::FileStorage;

/// Environment variable overriding [`Config::data_dir`].
pub const ENV_DATA_DIR: &str = "JOBTRACKER_DATA_DIR";
/// Environment variable overriding [`Config::theme_name`].
pub const ENV_THEME: &str = "JOBTRACKER_THEME";
/// Environment variable overriding [`Config::trace_level`].
pub const ENV_LOG: &str = "JOBTRACKER_LOG";

/// Application configuration parsed from `config.toml`.
///
/// Every key is optional; missing keys take the defaults below.
///
/// # Example
///
/// ```rust
/// use jobtracker::Config;
///
/// let config = Config::from_toml_str("theme = \"catppuccin-latte\"\nconfirm_clear = false")?;
/// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
/// assert!(!config.confirm_clear);
/// # Ok::<(), jobtracker::TrackerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the application file and logs.
    ///
    /// A leading `~` is expanded. Default: the platform data directory.
    pub data_dir: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log filter for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Ask before clearing every application. Default: `true`
    pub confirm_clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            confirm_clear: true,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Config`] when the text is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| TrackerError::Config(e.to_string()))
    }

    /// Loads configuration from a file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Io`] when the file exists but cannot be read
    /// and [`TrackerError::Config`] when it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("config_load", path = %path.display()).entered();

        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies environment overrides looked up through `lookup`.
    ///
    /// Empty values are ignored. Pass `|key| std::env::var(key).ok()` for the
    /// process environment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobtracker::Config;
    ///
    /// let config = Config::default().with_env_overrides(|key| {
    ///     (key == "JOBTRACKER_THEME").then(|| "catppuccin-latte".to_string())
    /// });
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = get(ENV_DATA_DIR) {
            self.data_dir = Some(dir);
        }
        if let Some(theme) = get(ENV_THEME) {
            self.theme_name = Some(theme);
        }
        if let Some(level) = get(ENV_LOG) {
            self.trace_level = Some(level);
        }
        self
    }

    /// Data directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::data_dir, infrastructure::expand_tilde)
    }

    /// Loads the configured theme, falling back to the default on failure.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Opens the file-backed store and builds the application state.
///
/// Creates the data directory if needed, loads the stored applications and
/// resolves the theme.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
///
/// # Example
///
/// ```rust
/// use jobtracker::{initialize, Config};
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: Some(dir.path().display().to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config)?;
/// assert!(state.store.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState<FileStorage>> {
    let data_dir = config.resolved_data_dir();
    tracing::debug!(data_dir = %data_dir.display(), "initializing jobtracker");

    let storage = FileStorage::new(data_dir)?;
    let store = ApplicationStore::open(storage);

    let mut state = AppState::new(store, config.resolve_theme());
    state.confirm_clear = config.confirm_clear;
    Ok(state)
}
