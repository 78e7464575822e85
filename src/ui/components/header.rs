//! Header component renderer.
//!
//! Renders the title bar with centered text and theme-aware colors.

use crate::ui::helpers::{pad, text_width, Palette};
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Renders the header title bar, centered in `cols`.
///
/// Padding is split evenly on both sides; when the width cannot be divided
/// evenly the right side gets the extra column.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_header<W: Write>(
    out: &mut W,
    header: &HeaderInfo,
    palette: &Palette<'_>,
    cols: usize,
) -> io::Result<()> {
    let colors = &palette.theme.colors;
    let title_len = text_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    write!(out, "{}{}", palette.bold(), palette.fg(&colors.header_fg))?;
    if let Some(bg) = &colors.header_bg {
        write!(out, "{}", palette.bg(bg))?;
    }

    pad(out, padding)?;
    write!(out, "{}", header.title)?;
    pad(out, cols.saturating_sub(padding + title_len))?;

    writeln!(out, "{}", palette.reset())
}
