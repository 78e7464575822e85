//! Pure view derivation over the application collection.
//!
//! Nothing here mutates state. [`derive_view`] computes the list shown to the
//! user from the canonical collection and the transient filter/search inputs;
//! [`count_by_status`] computes the numbers shown on the filter chips.

use crate::domain::{JobApplication, Status, StatusFilter};

/// Number of applications overall and per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    /// Count shown on the chip for `filter`.
    ///
    /// ```
    /// use jobtracker::app::StatusCounts;
    /// use jobtracker::domain::{Status, StatusFilter};
    ///
    /// let counts = StatusCounts { total: 3, offer: 1, ..Default::default() };
    /// assert_eq!(counts.get(StatusFilter::All), 3);
    /// assert_eq!(counts.get(StatusFilter::Only(Status::Offer)), 1);
    /// ```
    #[must_use]
    pub const fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total,
            StatusFilter::Only(status) => self.for_status(status),
        }
    }

    #[must_use]
    pub const fn for_status(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interview => self.interview,
            Status::Offer => self.offer,
            Status::Rejected => self.rejected,
        }
    }

    fn bump(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Applied => self.applied += 1,
            Status::Interview => self.interview += 1,
            Status::Offer => self.offer += 1,
            Status::Rejected => self.rejected += 1,
        }
    }
}

/// Counts the unfiltered collection, overall and per status.
#[must_use]
pub fn count_by_status(applications: &[JobApplication]) -> StatusCounts {
    applications
        .iter()
        .fold(StatusCounts::default(), |mut counts, app| {
            counts.bump(app.status);
            counts
        })
}

/// Filters, searches and sorts the collection for display.
///
/// 1. **Status filter**: exact match, skipped for [`StatusFilter::All`]
/// 2. **Search**: the trimmed query, case-folded per character, must be a
///    substring of the folded company, role or status name; skipped when the
///    query is blank
/// 3. **Sort**: descending `created_at`; ties keep collection order
///
/// # Example
///
/// ```rust
/// use jobtracker::app::derive_view;
/// use jobtracker::domain::{JobApplication, Status, StatusFilter};
///
/// let apps = vec![JobApplication {
///     id: "a".into(),
///     company: "Sky".into(),
///     role: "Analyst".into(),
///     date: "2026-10-01".into(),
///     status: Status::Offer,
///     created_at: 1,
/// }];
/// assert_eq!(derive_view(&apps, StatusFilter::All, "SKY").len(), 1);
/// assert_eq!(derive_view(&apps, StatusFilter::Only(Status::Applied), "").len(), 0);
/// ```
#[must_use]
pub fn derive_view<'a>(
    applications: &'a [JobApplication],
    filter: StatusFilter,
    query: &str,
) -> Vec<&'a JobApplication> {
    let needle = fold(query.trim());

    let _span = tracing::debug_span!("derive_view",
        total = applications.len(),
        filter = %filter,
        query_len = needle.len()
    ).entered();

    let mut visible: Vec<&JobApplication> = applications
        .iter()
        .filter(|app| filter.accepts(app.status))
        .filter(|app| needle.is_empty() || matches_query(app, &needle))
        .collect();

    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    tracing::debug!(visible = visible.len(), "view derived");
    visible
}

/// Returns true if the folded `needle` occurs in company, role or status.
fn matches_query(app: &JobApplication, needle: &str) -> bool {
    fold(&app.company).contains(needle)
        || fold(&app.role).contains(needle)
        || fold(app.status.as_str()).contains(needle)
}

/// Character ranges of case-insensitive, non-overlapping `query` occurrences in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end, ready for
/// highlight rendering. A blank query yields no ranges.
///
/// ```
/// use jobtracker::app::view::match_ranges;
///
/// assert_eq!(match_ranges("Data Analyst", "a"), vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
/// assert_eq!(match_ranges("Sky", " SK "), vec![(0, 2)]);
/// assert!(match_ranges("Sky", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().map(fold_char).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let mut ranges = Vec::new();
    let mut idx = 0;

    while idx + needle.len() <= haystack.len() {
        if haystack[idx..idx + needle.len()] == needle[..] {
            ranges.push((idx, idx + needle.len()));
            idx += needle.len();
        } else {
            idx += 1;
        }
    }

    ranges
}

/// Case-folds `text` one character at a time, keeping the character count.
///
/// Shared by filtering and highlighting so a row matches exactly when it has
/// at least one highlight range.
fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Lowercases a single character without changing the character count.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
