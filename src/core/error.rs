use thiserror::Error;

/// Errors raised by the collections, trackers and history of the model layer.
///
/// All of them are recoverable: the caller reports the message and the model
/// stays exactly as it was before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An identity collision on add or edit.
    #[error("This {0} already exists")]
    Duplicate(&'static str),

    /// The edit/remove target is absent.
    #[error("The {0} could not be found")]
    NotFound(&'static str),

    #[error("No more commands to undo!")]
    EmptyHistory,
}

pub type ModelResult<T> = Result<T, ModelError>;
