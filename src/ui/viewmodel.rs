//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated text, highlight
//! ranges, chip counts. No business logic lives here.
//!
//! # Example
//!
//! ```rust
//! use jobtracker::ui::viewmodel::{FilterChip, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Job Tracker (0) ".to_string() },
//!     chips: vec![FilterChip { label: "All".to_string(), count: 0, is_active: true }],
//!     search_bar: None,
//!     display_items: vec![],
//!     company_width: 20,
//!     role_width: 20,
//!     empty_state: None,
//!     footer: FooterInfo { keybindings: "add <company> <role>".to_string() },
//! };
//! assert!(vm.display_items.is_empty());
//! ```

use crate::domain::Status;

/// Width of the short id column.
pub const ID_COLUMN_WIDTH: usize = 8;

/// Width of the date column (`YYYY-MM-DD`).
pub const DATE_COLUMN_WIDTH: usize = 10;

/// Width of the status column (longest status name).
pub const STATUS_COLUMN_WIDTH: usize = 9;

/// Width of the relative "added" column (`just now`, `12d ago`).
pub const ADDED_COLUMN_WIDTH: usize = 8;

/// Spaces between columns.
pub const COLUMN_GAP: usize = 2;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Filter chips, `All` first, with live counts.
    pub chips: Vec<FilterChip>,

    /// Present when a search query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows of the list, already filtered and sorted.
    pub display_items: Vec<DisplayItem>,

    /// Column width the company text was truncated to.
    pub company_width: usize,

    /// Column width the role text was truncated to.
    pub role_width: usize,

    /// Shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Display information for a single application row.
///
/// Highlight ranges are `(start, end)` character indices (exclusive end) into
/// the displayed `company` and `role` text.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Short id used to refer to the row from the command line.
    pub id: String,
    pub company: String,
    pub role: String,
    pub date: String,
    pub status: Status,
    /// Relative creation time, e.g. `3h ago`.
    pub added: String,
    pub company_highlights: Vec<(usize, usize)>,
    pub role_highlights: Vec<(usize, usize)>,
}

/// One status filter chip, e.g. `Interview (2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    pub count: usize,
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints (e.g. "add  status <id> <status>  rm <id>").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No applications yet.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query, trimmed.
    pub query: String,
}
