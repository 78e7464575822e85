//! Event handling and state transition logic.
//!
//! This module implements the handler that turns user intents coming from the
//! front end into store mutations, view-state changes and action sequences.
//!
//! # Architecture
//!
//! 1. The front end translates input into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event and mutates [`AppState`]
//! 3. It returns whether the list should be redrawn plus [`Action`]s to execute
//!
//! Clearing everything is a two-step exchange: `ClearAll` yields
//! [`Action::ConfirmClear`], and the front end answers with
//! [`Event::ConfirmClear`] carrying the user's decision.
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::{handle_event, AppState, ApplicationStore, Event};
//! use jobtracker::domain::NewApplication;
//! use jobtracker::storage::MemoryStorage;
//! use jobtracker::ui::Theme;
//!
//! let mut state = AppState::new(ApplicationStore::open(MemoryStorage::default()), Theme::default());
//! let (render, _actions) =
//!     handle_event(&mut state, &Event::AddApplication(NewApplication::new("Sky", "Analyst")))?;
//! assert!(render);
//! assert_eq!(state.store.len(), 1);
//! # Ok::<(), jobtracker::TrackerError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{NewApplication, Status, StatusFilter};
use crate::storage::Storage;

/// User intents the front end can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submits the add form.
    AddApplication(NewApplication),

    /// Changes the status of one application.
    UpdateStatus {
        /// Full application id.
        id: String,
        status: Status,
    },

    /// Deletes one application.
    RemoveApplication {
        /// Full application id.
        id: String,
    },

    /// Requests clearing every application.
    ClearAll,

    /// Answers a pending [`Action::ConfirmClear`].
    ConfirmClear(bool),

    /// Selects a filter chip.
    SetStatusFilter(StatusFilter),

    /// Replaces the search query.
    SetSearch(String),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is false when the event changed
/// nothing visible, e.g. a rejected draft or a declined clear.
///
/// # Errors
///
/// Propagates storage write failures from the store. State is unchanged when
/// an error is returned.
pub fn handle_event<S: Storage>(state: &mut AppState<S>, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if is_mutation(event) && state.pending_clear {
        tracing::debug!("collection changed, dropping pending clear");
        state.pending_clear = false;
    }

    match event {
        Event::AddApplication(draft) => match state.store.add(draft.clone())? {
            Some(added) => Ok((
                true,
                vec![
                    Action::Notice(format!(
                        "Added {} ({}) as {} [{}]",
                        added.company,
                        added.role,
                        added.status,
                        added.short_id()
                    )),
                    Action::Render,
                ],
            )),
            None => {
                tracing::debug!("draft rejected");
                Ok((false, vec![]))
            }
        },
        Event::UpdateStatus { id, status } => {
            let updated = state.store.update_status(id, *status)?;
            if updated {
                Ok((true, vec![Action::Render]))
            } else {
                tracing::debug!(id = %id, "status update for unknown id");
                Ok((false, vec![]))
            }
        }
        Event::RemoveApplication { id } => {
            let removed = state.store.remove(id)?;
            if removed {
                Ok((true, vec![Action::Render]))
            } else {
                tracing::debug!(id = %id, "remove for unknown id");
                Ok((false, vec![]))
            }
        }
        Event::ClearAll => {
            if state.store.is_empty() {
                tracing::debug!("nothing to clear");
                return Ok((false, vec![]));
            }

            if state.confirm_clear {
                state.pending_clear = true;
                return Ok((
                    false,
                    vec![Action::ConfirmClear {
                        count: state.store.len(),
                    }],
                ));
            }

            clear_all(state)
        }
        Event::ConfirmClear(confirmed) => {
            if !state.pending_clear {
                tracing::debug!("confirmation without pending clear");
                return Ok((false, vec![]));
            }
            state.pending_clear = false;

            if *confirmed {
                clear_all(state)
            } else {
                tracing::debug!("clear declined");
                Ok((false, vec![]))
            }
        }
        Event::SetStatusFilter(filter) => {
            let changed = state.status_filter != *filter;
            state.status_filter = *filter;
            Ok((changed, if changed { vec![Action::Render] } else { vec![] }))
        }
        Event::SetSearch(query) => {
            let changed = state.search_query != *query;
            state.search_query.clone_from(query);
            Ok((changed, if changed { vec![Action::Render] } else { vec![] }))
        }
    }
}

/// Events that change the collection; any of them invalidates a pending clear,
/// since the user confirmed a count that no longer holds.
fn is_mutation(event: &Event) -> bool {
    matches!(
        event,
        Event::AddApplication(_) | Event::UpdateStatus { .. } | Event::RemoveApplication { .. }
    )
}

fn clear_all<S: Storage>(state: &mut AppState<S>) -> Result<(bool, Vec<Action>)> {
    let removed = state.store.clear()?;
    let noun = if removed == 1 { "application" } else { "applications" };
    Ok((
        true,
        vec![
            Action::Notice(format!("Cleared {removed} {noun}")),
            Action::Render,
        ],
    ))
}
