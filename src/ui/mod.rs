//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output through
//! composable rendering components, with theme support and search match
//! highlighting.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (palette, highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, terminal_cols};
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FilterChip, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
