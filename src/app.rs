//! A running session: the model, its undo history and where it is saved.
use crate::command::{Command, CommandOutcome};
use crate::core::history::HistoryManager;
use crate::core::model::Model;
use crate::core::sample;
use crate::store::{Storage, StorageError, StorageResult};
use tracing::{error, info};

pub struct App<S: Storage> {
    model: Model,
    history: HistoryManager,
    storage: S,
}

impl<S: Storage> App<S> {
    pub fn new(model: Model, storage: S) -> Self {
        let history = HistoryManager::new(&model);
        Self {
            model,
            history,
            storage,
        }
    }

    /// Opens the saved state. A fresh installation starts with the sample
    /// data when `sample_data` is set, otherwise empty.
    pub fn load(storage: S, sample_data: bool) -> StorageResult<Self> {
        let state = match storage.load_state()? {
            Some(state) => state,
            None if sample_data => {
                info!("No saved data, starting with sample data");
                sample::sample_state().map_err(|e| StorageError::DataFormat(e.to_string()))?
            }
            None => {
                info!("No saved data, starting empty");
                Default::default()
            }
        };
        let model = Model::from_state(state).map_err(|e| StorageError::DataFormat(e.to_string()))?;
        info!(?model, "Model ready");
        Ok(Self::new(model, storage))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Runs `command`. State-changing commands that succeed are recorded for
    /// undo and saved.
    pub fn execute(&mut self, command: &Command) -> CommandOutcome {
        let result = command.execute(&mut self.model, &mut self.history)?;
        self.history.record_if_state_changing(&self.model, command);
        if command.is_state_changing() || matches!(command, Command::Undo) {
            if let Err(e) = self.storage.save_state(&self.model.to_state()) {
                error!(error = %e, "Failed to save data");
                return Err(e.into());
            }
        }
        Ok(result)
    }
}
