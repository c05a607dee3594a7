use crate::{
    domain::TaskId,
    drag::{ColumnHitTest, DragMessage, DropRequest, ElementSize, GestureSource, Point},
    view::Placement,
};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum TouchState {
    #[default]
    Idle,
    Started {
        task_id: TaskId,
        size: ElementSize,
        started_at: DateTime<Utc>,
    },
    Dragging {
        task_id: TaskId,
        size: ElementSize,
    },
}

/// Result of a touch-move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchMove {
    /// No gesture, or still inside the tap window
    Ignored,
    /// The element should be drawn at `placement`; default scrolling is suppressed
    Follow { task_id: TaskId, placement: Placement },
}

/// Result of a touch-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEnd {
    /// No gesture was in progress
    Ignored,
    /// Never became a drag; the click handler should open the task
    Tap(TaskId),
    /// Dropped over a column
    Dropped(DropRequest),
    /// Dragged but released outside every column
    Cancelled(TaskId),
}

impl TouchEnd {
    /// The task whose element was repositioned and must be restored
    pub fn restore_target(&self) -> Option<TaskId> {
        match self {
            Self::Dropped(request) => Some(request.message.task_id),
            Self::Cancelled(task_id) => Some(*task_id),
            Self::Ignored | Self::Tap(_) => None,
        }
    }
}

/// Touch emulation of drag-and-drop
///
/// Idle -> Started on touch-start. Moves inside the threshold are ignored so
/// a tap still opens the task; the first later move switches to Dragging.
/// Touch-end always returns to Idle.
#[derive(Debug)]
pub struct TouchGesture {
    threshold: Duration,
    state: TouchState,
}

impl TouchGesture {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            state: TouchState::Idle,
        }
    }

    /// Captures the touched task; restarts any gesture in progress
    pub fn start(&mut self, task_id: TaskId, size: ElementSize, at: DateTime<Utc>) {
        self.state = TouchState::Started {
            task_id,
            size,
            started_at: at,
        };
    }

    pub fn move_to(&mut self, point: Point, at: DateTime<Utc>) -> TouchMove {
        match self.state {
            TouchState::Idle => TouchMove::Ignored,
            TouchState::Started {
                task_id,
                size,
                started_at,
            } => {
                if at - started_at < self.threshold {
                    debug!(task_id = %task_id, "touch move inside tap window");
                    return TouchMove::Ignored;
                }
                debug!(task_id = %task_id, "touch drag started");
                self.state = TouchState::Dragging { task_id, size };
                TouchMove::Follow {
                    task_id,
                    placement: centered(point, size),
                }
            }
            TouchState::Dragging { task_id, size } => TouchMove::Follow {
                task_id,
                placement: centered(point, size),
            },
        }
    }

    /// Finishes the gesture at `point`, resolving the column underneath
    pub fn end(&mut self, point: Point, hit_test: &dyn ColumnHitTest) -> TouchEnd {
        match std::mem::take(&mut self.state) {
            TouchState::Idle => TouchEnd::Ignored,
            TouchState::Started { task_id, .. } => TouchEnd::Tap(task_id),
            TouchState::Dragging { task_id, .. } => match hit_test.column_at(point) {
                Some(category) => TouchEnd::Dropped(DropRequest {
                    message: DragMessage {
                        task_id,
                        source: GestureSource::Touch,
                    },
                    category,
                }),
                None => {
                    debug!(task_id = %task_id, "touch released outside columns");
                    TouchEnd::Cancelled(task_id)
                }
            },
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TouchState::Dragging { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, TouchState::Idle)
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

fn centered(point: Point, size: ElementSize) -> Placement {
    Placement {
        left: point.x - size.width / 2.0,
        top: point.y - size.height / 2.0,
    }
}
