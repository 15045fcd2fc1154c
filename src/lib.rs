//! # Orga Core
//!
//! Storage backend and domain model for a personal kanban board.
//!
//! Boards own lists and lists own cards. Every storage engine implements the
//! [`Backend`] capability set; [`SqliteBackend`] keeps all three entity types
//! as JSON records in one SQLite file. Entities returned by a backend carry a
//! non-owning handle to it, so a board can list its lists and a list can
//! reorder its cards without the caller passing the backend around.

pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod storage;
pub mod workspace;

// Re-export commonly used types
pub use backend::{Backend, BoardHandler, CardHandler, ListHandler};
pub use config::Config;
pub use domain::{BackendRef, Board, Card, Label, List};
pub use error::{OrgaError, Result};
pub use storage::SqliteBackend;
