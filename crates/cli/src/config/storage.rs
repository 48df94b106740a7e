//! Storage Config

use std::path::PathBuf;

use clap::Args;
use pizzeria::snapshot::FileSnapshotStore;

/// Cart snapshot storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory the cart snapshot is kept in
    #[arg(long, env = "PIZZERIA_DATA_DIR", default_value = ".pizzeria")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Snapshot store for the cart slot in the data directory.
    #[must_use]
    pub fn snapshot_store(&self) -> FileSnapshotStore {
        FileSnapshotStore::in_dir(&self.data_dir)
    }
}
