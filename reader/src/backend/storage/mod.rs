//! # Storage Module
//!
//! Supplies feed snapshots to the domain layer.
//!
//! The donation feeds are owned by an external subscription; the reader only
//! ever reads them. This module hides where a snapshot comes from behind the
//! [`FeedSource`] trait.
//!
//! ## Current Implementation
//!
//! - **In-memory**: snapshots pushed by the subscription, swapped atomically
//! - **JSON file**: a dump of the subscriptions, re-read on every pass
//!
//! ## Design Principles
//!
//! - **Read Only**: nothing here writes feed data back
//! - **Snapshot Consistency**: a pass holds one `Arc` snapshot for its lifetime

pub mod json;
pub mod memory;
pub mod traits;

pub use json::JsonSnapshotFeed;
pub use memory::InMemoryFeed;
pub use traits::{FeedSource, SnapshotError};
