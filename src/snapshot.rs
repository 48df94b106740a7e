//! Snapshot Stores
//!
//! A single durable key-value slot holding the cart as a JSON string. The cart
//! store reads it once per session and rewrites it after every mutation; a
//! failing slot only costs persistence, never the in-memory cart.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Name of the slot the cart is persisted under.
pub const CART_SNAPSHOT_KEY: &str = "cart";

/// Errors raised by snapshot stores.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the backing file failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),

    /// No durable storage is reachable from this context.
    #[error("no durable storage available")]
    Unavailable,
}

/// A durable slot holding one JSON string.
pub trait SnapshotStore {
    /// Read the stored value; `Ok(None)` when nothing has been written.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if the backing storage cannot be read.
    fn read(&self) -> Result<Option<String>, SnapshotError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if the backing storage cannot be written.
    fn write(&mut self, value: &str) -> Result<(), SnapshotError>;
}

/// In-process slot, useful for tests and short-lived sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    value: Option<String>,
}

impl MemorySnapshotStore {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with a value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), SnapshotError> {
        self.value = Some(value.to_string());

        Ok(())
    }
}

/// One `<key>.json` file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Store the cart slot in the given data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, CART_SNAPSHOT_KEY)
    }

    /// Store a named slot in the given data directory.
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, value: &str) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Stage beside the target, then rename over it.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &self.path)?;

        Ok(())
    }
}

/// A slot for contexts with no durable storage, such as server rendering.
///
/// Reads find nothing and writes fail with [`SnapshotError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSnapshotStore;

impl SnapshotStore for DetachedSnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        Ok(None)
    }

    fn write(&mut self, _value: &str) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable)
    }
}
