//! Search bar component renderer.

use crate::ui::helpers::{pad, text_width, Palette};
use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the active search query in a 3-line bordered box.
///
/// ```text
/// [margin] ┌─────────────┐
/// [margin] │ Search: ... │
/// [margin] └─────────────┘
/// ```
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_search_bar<W: Write>(
    out: &mut W,
    search: &SearchBarInfo,
    palette: &Palette<'_>,
    cols: usize,
) -> io::Result<()> {
    let colors = &palette.theme.colors;
    let label = format!(" Search: {}", search.query);
    let inner_width = cols
        .saturating_sub(2 * SEARCH_BOX_MARGIN + 2)
        .max(text_width(&label) + 1);
    let border = palette.fg(&colors.search_bar_border);
    let reset = palette.reset();

    pad(out, SEARCH_BOX_MARGIN)?;
    writeln!(out, "{border}┌{}┐{reset}", "─".repeat(inner_width))?;

    pad(out, SEARCH_BOX_MARGIN)?;
    write!(out, "{border}│{reset}{}{label}", palette.fg(&colors.text_normal))?;
    pad(out, inner_width - text_width(&label))?;
    writeln!(out, "{border}│{reset}")?;

    pad(out, SEARCH_BOX_MARGIN)?;
    writeln!(out, "{border}└{}┘{reset}", "─".repeat(inner_width))
}
