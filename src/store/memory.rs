use super::{Storage, StorageResult};
use crate::core::state::TrackerState;
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps saved state in memory. Clones share the same slot, so a test can hand
/// one clone to the app and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<Option<TrackerState>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: TrackerState) -> Self {
        Self {
            state: Rc::new(RefCell::new(Some(state))),
        }
    }

    /// The last state saved, if any.
    pub fn saved(&self) -> Option<TrackerState> {
        self.state.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load_state(&self) -> StorageResult<Option<TrackerState>> {
        Ok(self.state.borrow().clone())
    }

    fn save_state(&self, state: &TrackerState) -> StorageResult<()> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}
