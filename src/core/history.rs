use crate::command::Command;
use crate::core::error::{ModelError, ModelResult};
use crate::core::model::Model;
use tracing::debug;

/// Linear undo history made of full model snapshots.
///
/// The bottom snapshot is the state the session started from; every
/// state-changing command pushes the state it produced on top. Undoing pops the
/// top and hands back a copy of the state underneath it.
pub struct HistoryManager {
    snapshots: Vec<Model>,
}

impl HistoryManager {
    pub fn new(initial: &Model) -> Self {
        Self {
            snapshots: vec![initial.deep_copy()],
        }
    }

    /// Snapshots `model` unless `command` only reads.
    pub fn record_if_state_changing(&mut self, model: &Model, command: &Command) {
        if !command.is_state_changing() {
            debug!(command = command.word(), "Skipping history for read-only command");
            return;
        }
        self.snapshots.push(model.deep_copy());
        debug!(
            command = command.word(),
            depth = self.undoable_steps(),
            "Recorded model snapshot"
        );
    }

    /// Drops the latest snapshot and returns the state before it.
    pub fn undo(&mut self) -> ModelResult<Model> {
        if self.snapshots.len() < 2 {
            return Err(ModelError::EmptyHistory);
        }
        self.snapshots.pop();
        let previous = self
            .snapshots
            .last()
            .map(Model::deep_copy)
            .ok_or(ModelError::EmptyHistory)?;
        debug!(depth = self.undoable_steps(), "Restored model snapshot");
        Ok(previous)
    }

    /// Number of commands that can still be undone.
    pub fn undoable_steps(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }
}
