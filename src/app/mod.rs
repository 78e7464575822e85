//! Application layer coordinating the store, view state and actions.
//!
//! This module sits between the front end (main.rs) and the domain/storage
//! layers. It follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → Store / View State → Actions → Front End
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: State container and view model computation
//! - [`store`]: Canonical collection with write-through persistence
//! - [`view`]: Pure filtering, searching, sorting and counting

pub mod actions;
pub mod handler;
pub mod state;
pub mod store;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use store::ApplicationStore;
pub use view::{count_by_status, derive_view, StatusCounts};
