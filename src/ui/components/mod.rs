//! Composable UI component renderers.
//!
//! Each component writes one part of the interface to an [`io::Write`].
//!
//! # Components
//!
//! - [`header`]: Title bar with the total count
//! - [`chips`]: Status filter chips with live counts
//! - [`search`]: Search box showing the active query
//! - [`table`]: Application list (ID, COMPANY, ROLE, DATE, STATUS, ADDED)
//! - [`empty`]: Empty state message
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Chips]
//! [Search Bar - 3 lines, only while searching]
//! [Table Headers + Rows]  or  [Empty State]
//! [Border]
//! [Footer]
//! ```

mod chips;
mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::Palette;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

use chips::render_chips;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line across `cols`.
fn render_border<W: Write>(out: &mut W, palette: &Palette<'_>, cols: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{}",
        palette.fg(&palette.theme.colors.border),
        "─".repeat(cols),
        palette.reset()
    )
}

/// Renders the full list screen for a view model.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_list<W: Write>(
    out: &mut W,
    vm: &UIViewModel,
    palette: &Palette<'_>,
    cols: usize,
) -> io::Result<()> {
    render_header(out, &vm.header, palette, cols)?;
    render_border(out, palette, cols)?;
    render_chips(out, &vm.chips, palette)?;

    if let Some(search) = &vm.search_bar {
        render_search_bar(out, search, palette, cols)?;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, palette, cols)?;
    } else {
        render_table_headers(out, palette, vm.company_width, vm.role_width)?;
        render_table_rows(out, &vm.display_items, palette, vm.company_width, vm.role_width)?;
    }

    render_border(out, palette, cols)?;
    render_footer(out, &vm.footer, palette, cols)
}
