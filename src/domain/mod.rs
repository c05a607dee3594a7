pub mod board;
pub mod selection;
pub mod task;
pub mod theme;

pub use board::{Board, BoardId};
pub use selection::ActiveBoard;
pub use task::{Category, Task, TaskId};
pub use theme::Theme;

use crate::error::{Result, TaskboardError};

/// Trims a user-supplied title, rejecting blank input with `message`
pub(crate) fn require_title(raw: &str, message: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskboardError::Validation(message.to_string()));
    }
    Ok(title.to_string())
}
