//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::{AppState, ApplicationStore};
//! use jobtracker::storage::MemoryStorage;
//! use jobtracker::ui::{render, Theme};
//!
//! let state = AppState::new(ApplicationStore::open(MemoryStorage::default()), Theme::default());
//! let mut out = Vec::new();
//! render(&state, 80, false, &mut out)?;
//! assert!(String::from_utf8(out).unwrap().contains("No applications yet."));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::app::AppState;
use crate::storage::Storage;
use crate::ui::components;
use crate::ui::helpers::Palette;
use std::io::{self, Write};

/// Terminal width used when the real one is unknown.
pub const DEFAULT_COLS: usize = 100;

/// Renders the application list to `out`.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `cols` - Terminal width in columns
/// * `color` - Whether to emit ANSI color sequences
/// * `out` - Destination, typically locked stdout
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render<S: Storage, W: Write>(
    state: &AppState<S>,
    cols: usize,
    color: bool,
    out: &mut W,
) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel(cols);
    let palette = Palette::new(&state.theme, color);

    components::render_list(out, &viewmodel, &palette, cols)?;
    out.flush()
}

/// Terminal width from the `COLUMNS` environment variable, or [`DEFAULT_COLS`].
///
/// Most shells set `COLUMNS` as a shell variable without exporting it, so
/// child processes usually don't see it and the fallback applies. Run
/// `COLUMNS=$COLUMNS jobtracker` (or `export COLUMNS`) to render at the real
/// width.
#[must_use]
pub fn terminal_cols() -> usize {
    parse_cols(std::env::var("COLUMNS").ok().as_deref())
}

/// Parses a `COLUMNS` value; missing, blank, zero or non-numeric values give
/// [`DEFAULT_COLS`].
fn parse_cols(value: Option<&str>) -> usize {
    value
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_COLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cols_falls_back_when_unset_or_invalid() {
        assert_eq!(parse_cols(None), DEFAULT_COLS);
        assert_eq!(parse_cols(Some("")), DEFAULT_COLS);
        assert_eq!(parse_cols(Some("0")), DEFAULT_COLS);
        assert_eq!(parse_cols(Some("wide")), DEFAULT_COLS);
        assert_eq!(parse_cols(Some(" 132 ")), 132);
    }
}
