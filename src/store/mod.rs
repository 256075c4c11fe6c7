//! Persistence of the tracker contents between sessions.
pub mod disk;
pub mod memory;

pub use disk::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::core::state::TrackerState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Data file is corrupted: {0}")]
    DataFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::DataFormat(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Somewhere tracker state can be loaded from and saved to.
pub trait Storage {
    /// `None` when nothing has been saved yet.
    fn load_state(&self) -> StorageResult<Option<TrackerState>>;

    fn save_state(&self, state: &TrackerState) -> StorageResult<()>;
}
