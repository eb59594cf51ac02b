//! Donation reader: turns donation feed snapshots and operator settings into
//! the ordered list drawn by the broadcast graphic.

pub mod backend;

pub use backend::config::{ConfigError, ReaderConfig};
pub use backend::{initialize_backend, AppState};
