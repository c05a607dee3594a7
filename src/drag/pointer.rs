use crate::{
    domain::{Category, TaskId},
    drag::{DragMessage, DropRequest, GestureSource},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PointerState {
    #[default]
    Idle,
    Dragging {
        payload: DragMessage,
        hovered: Option<Category>,
    },
}

/// Mouse drag-and-drop: press on a task, release over a column
#[derive(Debug, Default)]
pub struct PointerDrag {
    state: PointerState,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag, returning the transfer payload
    pub fn press(&mut self, task_id: TaskId) -> DragMessage {
        let payload = DragMessage {
            task_id,
            source: GestureSource::Pointer,
        };
        self.state = PointerState::Dragging {
            payload,
            hovered: None,
        };
        payload
    }

    /// Marks `category` as the hovered drop target
    ///
    /// Returns the previously hovered column so its highlight can be cleared.
    pub fn enter_column(&mut self, category: Category) -> Option<Category> {
        match &mut self.state {
            PointerState::Dragging { hovered, .. } => hovered.replace(category),
            PointerState::Idle => None,
        }
    }

    /// Clears the hover mark if it is on `category`
    pub fn leave_column(&mut self, category: Category) -> bool {
        match &mut self.state {
            PointerState::Dragging { hovered, .. } if *hovered == Some(category) => {
                *hovered = None;
                true
            }
            _ => false,
        }
    }

    /// Ends the drag; `None` for `column` means released outside every column
    pub fn release(&mut self, column: Option<Category>) -> Option<DropRequest> {
        let PointerState::Dragging { payload, .. } = std::mem::take(&mut self.state) else {
            debug!("pointer release without a drag");
            return None;
        };

        match column {
            Some(category) => Some(DropRequest {
                message: payload,
                category,
            }),
            None => {
                debug!(task_id = %payload.task_id, "pointer released outside columns");
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    pub fn hovered(&self) -> Option<Category> {
        match self.state {
            PointerState::Dragging { hovered, .. } => hovered,
            PointerState::Idle => None,
        }
    }
}
