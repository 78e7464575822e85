//! Job application domain model.
//!
//! This module defines [`JobApplication`], the record tracked by the store, the
//! [`Status`] enumeration it moves through, the [`StatusFilter`] used by the list
//! view, and [`NewApplication`], the draft collected by the add form.
//!
//! The serialized shape of [`JobApplication`] is the persisted format:
//!
//! ```json
//! {
//!   "id": "6f1c1a4e-8c0e-4a44-9a57-2b1d2f0f6a11",
//!   "company": "Sky",
//!   "role": "Junior Data Analyst",
//!   "date": "2026-10-17",
//!   "status": "Interview",
//!   "createdAt": 1792226400000
//! }
//! ```

use crate::domain::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the id prefix shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Number of milliseconds in one minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Number of milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Number of milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Progress of a single application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interview, Self::Offer, Self::Rejected];

    /// Canonical display and persisted name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    /// Parses a status name case-insensitively.
    ///
    /// ```
    /// use jobtracker::domain::Status;
    ///
    /// assert_eq!("interview".parse::<Status>().unwrap(), Status::Interview);
    /// assert!("hired".parse::<Status>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::InvalidStatus(s.to_string()))
    }
}

/// Status selector of the list view: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Every filter chip in display order, `All` first.
    pub const CHIPS: [Self; 5] = [
        Self::All,
        Self::Only(Status::Applied),
        Self::Only(Status::Interview),
        Self::Only(Status::Offer),
        Self::Only(Status::Rejected),
    ];

    /// Returns true if an application with `status` passes this filter.
    #[must_use]
    pub fn accepts(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

/// One tracked job application.
///
/// Records are created by [`crate::app::ApplicationStore::add`]; after that only
/// `status` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Opaque unique identifier (UUID v4).
    pub id: String,
    pub company: String,
    pub role: String,
    /// Application date as entered; `YYYY-MM-DD` unless the user typed otherwise.
    pub date: String,
    pub status: Status,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl JobApplication {
    /// Returns the id prefix shown in listings.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(SHORT_ID_LEN)
            .map_or(self.id.as_str(), |(idx, _)| &self.id[..idx])
    }

    /// Returns a human-readable string describing how long ago the record was added.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn added_ago(&self, now_ms: i64) -> String {
        let diff = now_ms.saturating_sub(self.created_at);

        if diff < MILLIS_PER_MINUTE {
            "just now".to_string()
        } else if diff < MILLIS_PER_HOUR {
            format!("{}m ago", diff / MILLIS_PER_MINUTE)
        } else if diff < MILLIS_PER_DAY {
            format!("{}h ago", diff / MILLIS_PER_HOUR)
        } else {
            format!("{}d ago", diff / MILLIS_PER_DAY)
        }
    }
}

/// Draft collected by the add form before it becomes a [`JobApplication`].
///
/// Company and role are stored untrimmed here; the store trims them and
/// rejects the draft if either ends up empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub date: String,
    pub status: Status,
}

impl NewApplication {
    /// Creates a draft dated today with status `Applied`.
    ///
    /// ```
    /// use jobtracker::domain::{NewApplication, Status};
    ///
    /// let draft = NewApplication::new("Sky", "Junior Data Analyst");
    /// assert_eq!(draft.status, Status::Applied);
    /// assert_eq!(draft.date.len(), 10);
    /// ```
    #[must_use]
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            date: today(),
            status: Status::default(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Today's local date as `YYYY-MM-DD`, the add form's default.
#[must_use]
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
