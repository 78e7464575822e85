//! Footer component renderer.
//!
//! Renders the help line with centered command hints.

use crate::ui::helpers::{pad, text_width, Palette};
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the footer help line, centered and dimmed.
///
/// Hints longer than the terminal width are written as-is and left to wrap.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_footer<W: Write>(
    out: &mut W,
    footer: &FooterInfo,
    palette: &Palette<'_>,
    cols: usize,
) -> io::Result<()> {
    let help_text = &footer.keybindings;
    let padding = cols.saturating_sub(text_width(help_text)) / 2;

    write!(out, "{}{}", palette.dim(), palette.fg(&palette.theme.colors.text_dim))?;
    pad(out, padding)?;
    write!(out, "{help_text}")?;
    writeln!(out, "{}", palette.reset())
}
