//! # Storage Traits
//!
//! Abstraction over where feed snapshots come from, so the render pass works
//! the same against a live subscription, a file or a test fixture.

use crate::backend::domain::models::donation::FeedSnapshot;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Failure to obtain a feed snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read feed snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Feed snapshot {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait defining the interface to the donation feed subscriptions
///
/// Each call hands out one immutable snapshot. A render pass takes a single
/// snapshot and works from it throughout, so it never sees a half-applied
/// feed update.
pub trait FeedSource: Send + Sync {
    /// The feed contents as of now
    fn snapshot(&self) -> Result<Arc<FeedSnapshot>, SnapshotError>;
}
