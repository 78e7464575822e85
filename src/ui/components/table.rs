//! Table component renderer.
//!
//! Renders the application list as six columns: ID, COMPANY, ROLE, DATE,
//! STATUS and ADDED. Company and role widths come from the view model; the
//! other columns are fixed.

use crate::ui::helpers::{self, pad, text_width, Palette};
use crate::ui::viewmodel::{
    DisplayItem, ADDED_COLUMN_WIDTH, COLUMN_GAP, DATE_COLUMN_WIDTH, ID_COLUMN_WIDTH,
    STATUS_COLUMN_WIDTH,
};
use std::io::{self, Write};

/// Renders the column headers in bold.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_table_headers<W: Write>(
    out: &mut W,
    palette: &Palette<'_>,
    company_width: usize,
    role_width: usize,
) -> io::Result<()> {
    write!(
        out,
        "{}{}",
        palette.bold(),
        palette.fg(&palette.theme.colors.header_fg)
    )?;
    write!(
        out,
        "{:<id$}{gap}{:<company$}{gap}{:<role$}{gap}{:<date$}{gap}{:<status$}{gap}{:<added$}",
        "ID",
        "COMPANY",
        "ROLE",
        "DATE",
        "STATUS",
        "ADDED",
        id = ID_COLUMN_WIDTH,
        company = company_width,
        role = role_width,
        date = DATE_COLUMN_WIDTH,
        status = STATUS_COLUMN_WIDTH,
        added = ADDED_COLUMN_WIDTH,
        gap = " ".repeat(COLUMN_GAP),
    )?;
    writeln!(out, "{}", palette.reset())
}

/// Renders every row in order.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_table_rows<W: Write>(
    out: &mut W,
    items: &[DisplayItem],
    palette: &Palette<'_>,
    company_width: usize,
    role_width: usize,
) -> io::Result<()> {
    for item in items {
        render_table_row(out, item, palette, company_width, role_width)?;
    }
    Ok(())
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Search match highlights on company and role
/// 2. Status badge color on the status column
/// 3. Normal text color everywhere else, dimmed for id and added columns
fn render_table_row<W: Write>(
    out: &mut W,
    item: &DisplayItem,
    palette: &Palette<'_>,
    company_width: usize,
    role_width: usize,
) -> io::Result<()> {
    let colors = &palette.theme.colors;
    let normal = palette.fg(&colors.text_normal);
    let dimmed = palette.fg(&colors.text_dim);

    write!(out, "{dimmed}{:<width$}", item.id, width = ID_COLUMN_WIDTH)?;
    pad(out, COLUMN_GAP)?;

    write!(out, "{normal}")?;
    helpers::render_highlighted_text(out, &item.company, &item.company_highlights, palette, &normal)?;
    pad(out, company_width.saturating_sub(text_width(&item.company)) + COLUMN_GAP)?;

    helpers::render_highlighted_text(out, &item.role, &item.role_highlights, palette, &normal)?;
    pad(out, role_width.saturating_sub(text_width(&item.role)) + COLUMN_GAP)?;

    write!(out, "{}", item.date)?;
    pad(out, DATE_COLUMN_WIDTH.saturating_sub(text_width(&item.date)) + COLUMN_GAP)?;

    write!(
        out,
        "{}{}{:<width$}{}",
        palette.bold(),
        palette.fg(colors.status(item.status)),
        item.status.as_str(),
        palette.reset(),
        width = STATUS_COLUMN_WIDTH
    )?;
    pad(out, COLUMN_GAP)?;

    write!(out, "{dimmed}{}", item.added)?;
    writeln!(out, "{}", palette.reset())
}
