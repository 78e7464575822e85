//! Storage layer for persisting the application collection.
//!
//! # Modules
//!
//! - `backend`: the [`Storage`] key/value trait
//! - `file`: directory-backed implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `persistence`: JSON encoding of the collection under [`STORAGE_KEY`]

pub mod backend;
pub mod file;
pub mod memory;
pub mod persistence;

pub use backend::Storage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persistence::{load_applications, save_applications, STORAGE_KEY};
