use crate::backend::domain::models::donation::FeedSnapshot;
use crate::backend::io::mappers::DonationMapper;
use crate::backend::storage::traits::{FeedSource, SnapshotError};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Feed read from a JSON dump of the subscriptions
/// (`{"donations": [...], "alldonations": [...], "donors": [...]}`).
///
/// The file is re-read on every snapshot so an external process can keep
/// rewriting it.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFeed {
    path: PathBuf,
}

impl JsonSnapshotFeed {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedSource for JsonSnapshotFeed {
    fn snapshot(&self) -> Result<Arc<FeedSnapshot>, SnapshotError> {
        load_snapshot(&self.path).map(Arc::new)
    }
}

/// Read and ingest one snapshot file
pub fn load_snapshot(path: &Path) -> Result<FeedSnapshot, SnapshotError> {
    debug!("Reading feed snapshot from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dto: shared::FeedSnapshot =
        serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let snapshot = DonationMapper::snapshot_to_domain(dto);
    info!(
        "📄 Loaded feed snapshot {}: {} live, {} all-time, {} donors",
        path.display(),
        snapshot.donations.len(),
        snapshot.all_donations.len(),
        snapshot.donors.len()
    );
    Ok(snapshot)
}
