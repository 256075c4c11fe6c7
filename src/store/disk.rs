use super::{Storage, StorageResult};
use crate::core::state::TrackerState;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Stores the whole tracker state as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load_state(&self) -> StorageResult<Option<TrackerState>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let state: TrackerState = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            clients = state.clients.len(),
            services = state.services.len(),
            "Loaded data file"
        );
        Ok(Some(state))
    }

    fn save_state(&self, state: &TrackerState) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "Saved data file");
        Ok(())
    }
}
