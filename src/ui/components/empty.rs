//! Empty state component renderer.

use crate::ui::helpers::{pad, text_width, Palette};
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders the empty state message as two centered lines after a blank line.
///
/// The message uses the `empty_state_fg` theme color, the subtitle `text_dim`
/// with dim styling.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_empty_state<W: Write>(
    out: &mut W,
    empty: &EmptyState,
    palette: &Palette<'_>,
    cols: usize,
) -> io::Result<()> {
    let colors = &palette.theme.colors;

    writeln!(out)?;

    write!(out, "{}", palette.fg(&colors.empty_state_fg))?;
    pad(out, cols.saturating_sub(text_width(&empty.message)) / 2)?;
    writeln!(out, "{}{}", empty.message, palette.reset())?;

    write!(out, "{}{}", palette.dim(), palette.fg(&colors.text_dim))?;
    pad(out, cols.saturating_sub(text_width(&empty.subtitle)) / 2)?;
    writeln!(out, "{}{}", empty.subtitle, palette.reset())?;

    writeln!(out)
}
