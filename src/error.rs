use crate::domain::TaskId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskboardError>;

#[derive(Debug, Error)]
pub enum TaskboardError {
    #[error("{0}")]
    Validation(String),

    #[error("A board named \"{0}\" already exists")]
    DuplicateBoard(String),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("No board is selected. Create a board first.")]
    NoActiveBoard,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// How the interaction layer surfaces an error to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Blocking alert; the operation was aborted without state change
    Alert(String),
    /// Stale reference; swallowed
    Silent,
    /// Unrecoverable; propagated to the caller
    Fatal,
}

impl TaskboardError {
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Validation(_)
            | Self::DuplicateBoard(_)
            | Self::NoActiveBoard
            | Self::InvalidCategory(_) => Disposition::Alert(self.to_string()),
            Self::TaskNotFound(_) | Self::BoardNotFound(_) => Disposition::Silent,
            Self::StorageError(_)
            | Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ConfigError(_) => Disposition::Fatal,
        }
    }
}
