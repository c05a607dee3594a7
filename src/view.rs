//! Collaborators the engine calls into after every mutation.
//!
//! Rendering, toasts and modal dialogs live outside the crate; the engine
//! only tells the view what changed and asks it the occasional question.

use crate::domain::{ActiveBoard, Board, Category, Task, TaskId};

/// Screen position of a dragged element's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

pub trait View {
    /// Redraws the task columns with the active board's tasks
    fn render(&mut self, tasks: &[&Task], active: &ActiveBoard);

    /// Redraws the board list
    fn render_boards(&mut self, boards: &[Board], active: &ActiveBoard);

    /// Transient feedback such as a toast
    fn notify(&mut self, message: &str);

    /// Blocking alert for rejected input
    fn alert(&mut self, message: &str) {
        self.notify(message);
    }

    fn confirm(&mut self, prompt: &str) -> bool;

    /// `None` when the user cancels
    fn prompt_text(&mut self, prompt: &str) -> Option<String>;

    /// Moves the element of a touch-dragged task to an absolute position
    fn place_element(&mut self, _task: TaskId, _placement: Placement) {}

    /// Puts a touch-dragged element back into normal flow
    fn restore_element(&mut self, _task: TaskId) {}

    /// Toggles drop highlighting on a column
    fn highlight_column(&mut self, _category: Category, _on: bool) {}
}

/// A view that draws nothing, confirms everything and never answers prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl View for NullView {
    fn render(&mut self, _tasks: &[&Task], _active: &ActiveBoard) {}

    fn render_boards(&mut self, _boards: &[Board], _active: &ActiveBoard) {}

    fn notify(&mut self, _message: &str) {}

    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }

    fn prompt_text(&mut self, _prompt: &str) -> Option<String> {
        None
    }
}
