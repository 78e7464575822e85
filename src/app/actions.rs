//! Actions representing side effects to be executed by the front end.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! bridge pure state transitions and the effectful parts only the front end can
//! perform: drawing the list, asking the user a question, printing a message.
//!
//! # Example
//!
//! ```rust
//! use jobtracker::app::Action;
//!
//! let actions = vec![Action::Notice("Added Sky".to_string()), Action::Render];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands the front end executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Redraws the application list from the current state.
    Render,

    /// Asks the user to confirm clearing every application.
    ///
    /// The front end answers by dispatching
    /// [`Event::ConfirmClear`](crate::app::Event::ConfirmClear).
    ConfirmClear {
        /// Number of applications that would be removed.
        count: usize,
    },

    /// Shows a one-line message to the user.
    Notice(String),
}
