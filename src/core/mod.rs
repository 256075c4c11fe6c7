//! Core domain: value objects, entities, trackers and the model.

pub mod collection;
pub mod config;
pub mod entity;
pub mod error;
pub mod history;
pub mod log;
pub mod model;
pub mod report;
pub mod sample;
pub mod state;
pub mod tracker;
pub mod types;

// Re-export main types for cleaner imports
pub use error::{ModelError, ModelResult};
pub use history::HistoryManager;
pub use model::Model;
pub use state::TrackerState;
