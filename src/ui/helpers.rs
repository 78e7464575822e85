//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across the UI
//! components: a [`Palette`] that turns theme colors into escape sequences (or
//! nothing, when color is off), search match highlighting, and padding.
//!
//! All widths are counted in characters, not bytes.

use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Theme plus a color switch.
///
/// Components ask the palette for escape sequences; with color disabled every
/// sequence is empty and the output is plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    pub theme: &'a Theme,
    pub color: bool,
}

impl<'a> Palette<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, color: bool) -> Self {
        Self { theme, color }
    }

    #[must_use]
    pub fn fg(&self, hex: &str) -> String {
        if self.color {
            Theme::fg(hex)
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn bg(&self, hex: &str) -> String {
        if self.color {
            Theme::bg(hex)
        } else {
            String::new()
        }
    }

    #[must_use]
    pub const fn bold(&self) -> &'static str {
        if self.color {
            Theme::bold()
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn dim(&self) -> &'static str {
        if self.color {
            Theme::dim()
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn reset(&self) -> &'static str {
        if self.color {
            Theme::reset()
        } else {
            ""
        }
    }
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `count` spaces.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn pad<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    write!(out, "{:count$}", "")
}

/// Writes text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping. After each highlighted section `restore` is written so the
/// surrounding text color continues.
///
/// # Errors
///
/// Propagates write errors from `out`.
///
/// # Example
///
/// ```rust
/// use jobtracker::ui::helpers::{render_highlighted_text, Palette};
/// use jobtracker::ui::Theme;
///
/// let theme = Theme::default();
/// let mut out = Vec::new();
/// render_highlighted_text(&mut out, "Sky", &[(0, 2)], &Palette::new(&theme, false), "")?;
/// assert_eq!(String::from_utf8(out).unwrap(), "Sky");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_highlighted_text<W: Write>(
    out: &mut W,
    text: &str,
    ranges: &[(usize, usize)],
    palette: &Palette<'_>,
    restore: &str,
) -> io::Result<()> {
    if ranges.is_empty() || !palette.color {
        return write!(out, "{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        write!(out, "{normal_section}")?;

        let colors = &palette.theme.colors;
        write!(
            out,
            "{}{}",
            palette.fg(&colors.match_highlight_fg),
            palette.bg(&colors.match_highlight_bg)
        )?;
        let highlighted_section: String = chars[start..end].iter().collect();
        write!(out, "{highlighted_section}{}{restore}", palette.reset())?;

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        write!(out, "{remaining}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_matched_section() {
        let theme = Theme::default();
        let palette = Palette::new(&theme, true);
        let mut out = Vec::new();
        render_highlighted_text(&mut out, "Sky", &[(1, 2)], &palette, "").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with('S'));
        assert!(text.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
        assert!(text.ends_with(&format!("k{}y", Theme::reset())));
    }

    #[test]
    fn pad_writes_spaces() {
        let mut out = Vec::new();
        pad(&mut out, 3).unwrap();
        assert_eq!(out, b"   ");
    }
}
