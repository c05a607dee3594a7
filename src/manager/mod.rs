//! Mutating operations over the stores.
//!
//! Each operation validates, mutates, persists and re-renders within the
//! same call. Managers borrow the stores for the duration of one user
//! event; they own nothing.

pub mod board_manager;
pub mod task_manager;

pub use board_manager::BoardManager;
pub use task_manager::TaskManager;

use crate::{domain::ActiveBoard, store::TaskStore, view::View};

/// Redraws the columns for the active board, or nothing under the sentinel
pub(crate) fn render_tasks(view: &mut dyn View, tasks: &TaskStore, active: &ActiveBoard) {
    let visible = match active.title() {
        Some(title) => tasks.list_by_board(title),
        None => Vec::new(),
    };
    view.render(&visible, active);
}
