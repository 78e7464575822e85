//! Filesystem locations for data, configuration and logs.
//!
//! Defaults follow the platform conventions exposed by [`directories`]
//! (`~/.local/share/jobtracker` and `~/.config/jobtracker` on Linux). When no
//! home directory can be determined, a `.jobtracker` directory in the current
//! working directory is used instead.

use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "jobtracker";
const FALLBACK_DIR: &str = ".jobtracker";

/// Name of the configuration file inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "jobtracker.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Returns the default data directory, where the application file and logs live.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Returns the default configuration directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

/// Returns the default configuration file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Returns the log file path for a data directory.
#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use jobtracker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("~user/x"), std::path::PathBuf::from("~user/x"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    if path == "~" {
        if let Some(home) = home() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("data/jobs"), PathBuf::from("data/jobs"));
    }

    #[test]
    fn expand_tilde_uses_home_when_known() {
        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_tilde("~/jobs"), dirs.home_dir().join("jobs"));
            assert_eq!(expand_tilde("~"), dirs.home_dir().to_path_buf());
        }
    }

    #[test]
    fn log_file_lives_in_data_dir() {
        assert_eq!(
            log_file(Path::new("/tmp/jt")),
            PathBuf::from("/tmp/jt/jobtracker.log")
        );
    }
}
