//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the container for the canonical store plus
//! the transient state of the list view: the active status filter and the search
//! query. It is the single source of truth the renderer reads from.
//!
//! # State Components
//!
//! - **Store**: canonical, persisted application collection
//! - **Status Filter**: chip currently selected (`All` by default)
//! - **Search Query**: free text matched against company, role and status
//! - **Pending Clear**: set while a clear-all is waiting for confirmation
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::{AppState, ApplicationStore};
//! use jobtracker::storage::MemoryStorage;
//! use jobtracker::ui::Theme;
//!
//! let state = AppState::new(ApplicationStore::open(MemoryStorage::default()), Theme::default());
//! let viewmodel = state.compute_viewmodel(80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::store::ApplicationStore;
use super::view::{count_by_status, derive_view, match_ranges, StatusCounts};
use crate::domain::{JobApplication, StatusFilter};
use crate::storage::Storage;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterChip, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
    ADDED_COLUMN_WIDTH, COLUMN_GAP, DATE_COLUMN_WIDTH, ID_COLUMN_WIDTH, STATUS_COLUMN_WIDTH,
};

/// Narrowest the company and role columns are allowed to get.
const MIN_TEXT_COLUMN_WIDTH: usize = 8;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState<S: Storage> {
    /// Canonical collection with write-through persistence.
    pub store: ApplicationStore<S>,

    /// Status chip currently selected.
    pub status_filter: StatusFilter,

    /// Current search query, matched case-insensitively after trimming.
    pub search_query: String,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Whether clearing everything needs explicit confirmation.
    pub confirm_clear: bool,

    /// True between a clear-all request and the user's answer.
    pub pending_clear: bool,
}

impl<S: Storage> AppState<S> {
    /// Creates a state over an opened store with the `All` filter and no query.
    #[must_use]
    pub fn new(store: ApplicationStore<S>, theme: Theme) -> Self {
        Self {
            store,
            status_filter: StatusFilter::All,
            search_query: String::new(),
            theme,
            confirm_clear: true,
            pending_clear: false,
        }
    }

    /// Applications visible under the current filter and query, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<&JobApplication> {
        derive_view(
            self.store.applications(),
            self.status_filter,
            &self.search_query,
        )
    }

    /// Counts over the unfiltered collection.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        count_by_status(self.store.applications())
    }

    /// Computes a renderable UI view model for a terminal `cols` wide.
    ///
    /// Company and role share the width left over after the fixed id, date and
    /// status columns; longer values are truncated with `...`. Highlight ranges
    /// are computed for the search query and clipped to the truncated text.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let counts = self.counts();
        let visible = self.visible();
        let now_ms = chrono::Utc::now().timestamp_millis();
        let (company_width, role_width) = Self::text_column_widths(cols);

        let display_items: Vec<DisplayItem> = visible
            .iter()
            .map(|app| self.compute_display_item(app, company_width, role_width, now_ms))
            .collect();

        let empty_state = if display_items.is_empty() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            header: HeaderInfo {
                title: format!(" Job Tracker ({}) ", counts.total),
            },
            chips: self.compute_chips(&counts),
            search_bar: self.compute_search_bar(),
            display_items,
            company_width,
            role_width,
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(
        &self,
        app: &JobApplication,
        company_width: usize,
        role_width: usize,
        now_ms: i64,
    ) -> DisplayItem {
        let company = truncate(&app.company, company_width);
        let role = truncate(&app.role, role_width);

        DisplayItem {
            id: app.short_id().to_string(),
            company_highlights: clip_ranges(match_ranges(&app.company, &self.search_query), &app.company, company_width),
            role_highlights: clip_ranges(match_ranges(&app.role, &self.search_query), &app.role, role_width),
            company,
            role,
            date: app.date.clone(),
            status: app.status,
            added: app.added_ago(now_ms),
        }
    }

    fn compute_chips(&self, counts: &StatusCounts) -> Vec<FilterChip> {
        StatusFilter::CHIPS
            .into_iter()
            .map(|filter| FilterChip {
                label: filter.label().to_string(),
                count: counts.get(filter),
                is_active: filter == self.status_filter,
            })
            .collect()
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let query = self.search_query.trim();
        if query.is_empty() {
            None
        } else {
            Some(SearchBarInfo {
                query: query.to_string(),
            })
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.is_empty() {
            EmptyState {
                message: "No applications yet.".to_string(),
                subtitle: "Add one with: jobtracker add <company> <role>".to_string(),
            }
        } else {
            EmptyState {
                message: "No applications match.".to_string(),
                subtitle: format!(
                    "filter: {}  search: \"{}\"",
                    self.status_filter,
                    self.search_query.trim()
                ),
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.store.is_empty() {
            "add <company> <role>  --help: all commands".to_string()
        } else {
            "add  status <id> <status>  rm <id>  list --status <s> --search <q>  clear".to_string()
        };
        FooterInfo { keybindings }
    }

    /// Splits the free width between the company and role columns.
    ///
    /// Company gets the larger half; neither drops below the minimum.
    const fn text_column_widths(cols: usize) -> (usize, usize) {
        let fixed = ID_COLUMN_WIDTH
            + DATE_COLUMN_WIDTH
            + STATUS_COLUMN_WIDTH
            + ADDED_COLUMN_WIDTH
            + 5 * COLUMN_GAP;
        let free = cols.saturating_sub(fixed);
        let role = free / 2;
        let company = free - role;

        let company = if company < MIN_TEXT_COLUMN_WIDTH { MIN_TEXT_COLUMN_WIDTH } else { company };
        let role = if role < MIN_TEXT_COLUMN_WIDTH { MIN_TEXT_COLUMN_WIDTH } else { role };
        (company, role)
    }
}

/// Truncates `text` to `max_width` characters, ending in `...` when shortened.
fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

/// Drops highlight ranges that fall outside the part of `text` kept by [`truncate`].
fn clip_ranges(ranges: Vec<(usize, usize)>, text: &str, max_width: usize) -> Vec<(usize, usize)> {
    let len = text.chars().count();
    let limit = if len <= max_width { len } else { max_width.saturating_sub(3) };

    ranges
        .into_iter()
        .filter(|&(start, _)| start < limit)
        .map(|(start, end)| (start, end.min(limit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Sky", 10), "Sky");
        assert_eq!(truncate("Deutsche Bahn", 8), "Deuts...");
    }

    #[test]
    fn clip_ranges_respects_ellipsis() {
        assert_eq!(clip_ranges(vec![(0, 2), (4, 7)], "Deutsche Bahn", 8), vec![(0, 2), (4, 5)]);
        assert_eq!(clip_ranges(vec![(6, 8)], "Deutsche Bahn", 8), Vec::<(usize, usize)>::new());
        assert_eq!(clip_ranges(vec![(0, 3)], "Sky", 8), vec![(0, 3)]);
    }
}
