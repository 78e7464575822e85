//! Canonical application collection with write-through persistence.
//!
//! [`ApplicationStore`] owns the ordered list of [`JobApplication`] records and
//! exposes the only operations allowed to change it: add, status update, remove
//! and clear. Every mutation is persisted before it becomes visible in memory.
//!
//! # Ordering
//!
//! New records are prepended, so the collection is newest-first by insertion.
//! `created_at` is strictly increasing across records added through one store,
//! which keeps the view sort deterministic even within a single millisecond.
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::ApplicationStore;
//! use jobtracker::domain::NewApplication;
//! use jobtracker::storage::MemoryStorage;
//!
//! let mut store = ApplicationStore::open(MemoryStorage::default());
//! let added = store.add(NewApplication::new("  Sky ", "Analyst"))?;
//! assert_eq!(added.map(|a| a.company), Some("Sky".to_string()));
//! assert!(store.add(NewApplication::new("   ", "Analyst"))?.is_none());
//! assert_eq!(store.len(), 1);
//! # Ok::<(), jobtracker::TrackerError>(())
//! ```

use crate::domain::error::{Result, TrackerError};
use crate::domain::{JobApplication, NewApplication, Status};
use crate::storage::{load_applications, save_applications, Storage};

/// In-memory application collection bound to a storage backend.
#[derive(Debug, Clone)]
pub struct ApplicationStore<S: Storage> {
    storage: S,
    applications: Vec<JobApplication>,
}

impl<S: Storage> ApplicationStore<S> {
    /// Opens a store over `storage`, loading whatever collection it holds.
    ///
    /// Absent or corrupt stored data yields an empty store; this never fails.
    pub fn open(storage: S) -> Self {
        let applications = load_applications(&storage);
        tracing::debug!(count = applications.len(), "application store opened");
        Self {
            storage,
            applications,
        }
    }

    /// Records in collection order (most recently added first).
    #[must_use]
    pub fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Looks up a record by its full id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&JobApplication> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// Storage backend the store writes through to.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Adds a new application from a form draft.
    ///
    /// Company and role are trimmed. If either is empty afterwards the draft is
    /// ignored and `Ok(None)` is returned without touching storage. Otherwise the
    /// record gets a fresh UUID and creation timestamp, is prepended to the
    /// collection and persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the new collection fails; the store is left
    /// unchanged in that case.
    pub fn add(&mut self, draft: NewApplication) -> Result<Option<JobApplication>> {
        let company = draft.company.trim();
        let role = draft.role.trim();

        if company.is_empty() || role.is_empty() {
            tracing::debug!(
                company_empty = company.is_empty(),
                role_empty = role.is_empty(),
                "ignoring draft with empty required field"
            );
            return Ok(None);
        }

        let application = JobApplication {
            id: uuid::Uuid::new_v4().to_string(),
            company: company.to_string(),
            role: role.to_string(),
            date: draft.date,
            status: draft.status,
            created_at: self.next_timestamp(),
        };

        let _span = tracing::debug_span!("store_add",
            id = %application.id,
            company = %application.company,
            status = %application.status
        ).entered();

        let mut next = Vec::with_capacity(self.applications.len() + 1);
        next.push(application.clone());
        next.extend(self.applications.iter().cloned());
        self.commit(next)?;

        tracing::debug!(count = self.applications.len(), "application added");
        Ok(Some(application))
    }

    /// Sets the status of the record with `id`.
    ///
    /// An unknown id changes nothing, but the collection is still persisted.
    /// Returns whether a record was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the store is left unchanged.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<bool> {
        let _span = tracing::debug_span!("store_update_status", id = %id, status = %status).entered();

        let mut found = false;
        let next: Vec<JobApplication> = self
            .applications
            .iter()
            .map(|app| {
                if app.id == id {
                    found = true;
                    JobApplication {
                        status,
                        ..app.clone()
                    }
                } else {
                    app.clone()
                }
            })
            .collect();
        self.commit(next)?;

        tracing::debug!(found = found, "status updated");
        Ok(found)
    }

    /// Removes the record with `id`.
    ///
    /// An unknown id changes nothing, but the collection is still persisted.
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the store is left unchanged.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("store_remove", id = %id).entered();

        let before = self.applications.len();
        let next: Vec<JobApplication> = self
            .applications
            .iter()
            .filter(|app| app.id != id)
            .cloned()
            .collect();
        let removed = next.len() != before;
        self.commit(next)?;

        tracing::debug!(removed = removed, "remove processed");
        Ok(removed)
    }

    /// Empties the collection and persists the empty list.
    ///
    /// Confirmation is the caller's job; see [`crate::app::handle_event`].
    /// Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the store is left unchanged.
    pub fn clear(&mut self) -> Result<usize> {
        let _span = tracing::debug_span!("store_clear", count = self.applications.len()).entered();

        let removed = self.applications.len();
        self.commit(Vec::new())?;

        tracing::debug!(removed = removed, "store cleared");
        Ok(removed)
    }

    /// Resolves a full id or a unique id prefix to a full id.
    ///
    /// An exact match always wins over prefix matches.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::UnknownApplication`] if nothing matches
    /// - [`TrackerError::AmbiguousId`] if the prefix matches several records
    pub fn resolve_id(&self, id_or_prefix: &str) -> Result<String> {
        let wanted = id_or_prefix.trim();
        if wanted.is_empty() {
            return Err(TrackerError::UnknownApplication(id_or_prefix.to_string()));
        }

        if let Some(exact) = self.get(wanted) {
            return Ok(exact.id.clone());
        }

        let mut matches = self
            .applications
            .iter()
            .filter(|app| app.id.starts_with(wanted));

        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only.id.clone()),
            (Some(_), Some(_)) => Err(TrackerError::AmbiguousId(wanted.to_string())),
            (None, _) => Err(TrackerError::UnknownApplication(wanted.to_string())),
        }
    }

    /// Persists `next`, then makes it the in-memory collection.
    fn commit(&mut self, next: Vec<JobApplication>) -> Result<()> {
        save_applications(&mut self.storage, &next)?;
        self.applications = next;
        Ok(())
    }

    /// Current time in milliseconds, bumped past the newest existing record.
    fn next_timestamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.applications
            .iter()
            .map(|app| app.created_at)
            .max()
            .map_or(now, |newest| now.max(newest.saturating_add(1)))
    }
}
