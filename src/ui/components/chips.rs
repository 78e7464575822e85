//! Status filter chips renderer.

use crate::ui::helpers::Palette;
use crate::ui::viewmodel::FilterChip;
use std::io::{self, Write};

/// Renders the filter chips on one line: `[All (3)]  Applied (1)  ...`.
///
/// The active chip is bracketed and drawn with the chip highlight colors, so
/// it stays recognizable without color.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_chips<W: Write>(
    out: &mut W,
    chips: &[FilterChip],
    palette: &Palette<'_>,
) -> io::Result<()> {
    let colors = &palette.theme.colors;

    write!(out, " ")?;
    for (idx, chip) in chips.iter().enumerate() {
        if idx > 0 {
            write!(out, "  ")?;
        }

        if chip.is_active {
            write!(
                out,
                "{}{}{}[{} ({})]{}",
                palette.bold(),
                palette.fg(&colors.chip_active_fg),
                palette.bg(&colors.chip_active_bg),
                chip.label,
                chip.count,
                palette.reset()
            )?;
        } else {
            write!(
                out,
                "{} {} ({}) {}",
                palette.fg(&colors.text_normal),
                chip.label,
                chip.count,
                palette.reset()
            )?;
        }
    }
    writeln!(out)
}
