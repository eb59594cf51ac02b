use crate::backend::domain::models::donation::FeedSnapshot;
use crate::backend::storage::traits::{FeedSource, SnapshotError};
use log::info;
use std::sync::{Arc, PoisonError, RwLock};

/// Feed held in memory and replaced wholesale whenever the subscription
/// pushes an update
#[derive(Debug, Default)]
pub struct InMemoryFeed {
    current: RwLock<Arc<FeedSnapshot>>,
}

impl InMemoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: FeedSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Swap in a new snapshot. Passes already holding the previous one keep it.
    pub fn publish(&self, snapshot: FeedSnapshot) {
        info!(
            "📥 Feed updated: {} live, {} all-time, {} donors",
            snapshot.donations.len(),
            snapshot.all_donations.len(),
            snapshot.donors.len()
        );
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(snapshot);
    }
}

impl FeedSource for InMemoryFeed {
    fn snapshot(&self) -> Result<Arc<FeedSnapshot>, SnapshotError> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(&current))
    }
}
