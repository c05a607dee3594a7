//! Gesture handling that moves tasks between columns.
//!
//! Two paths feed the same outcome. A pointer drag carries the task id
//! from press to release; a touch gesture emulates the same thing with a
//! tap/drag debounce and manual element positioning. Both finish with a
//! [`DropRequest`] that the caller applies through
//! [`TaskManager::reassign_category`](crate::manager::TaskManager::reassign_category).

pub mod pointer;
pub mod touch;

pub use pointer::PointerDrag;
pub use touch::{TouchEnd, TouchGesture, TouchMove};

use crate::domain::{Category, TaskId};
use chrono::{DateTime, Duration, Utc};

/// Which input produced a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Pointer,
    Touch,
}

/// Payload carried from the start of a drag to the drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMessage {
    pub task_id: TaskId,
    pub source: GestureSource,
}

/// A completed drop onto a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRequest {
    pub message: DragMessage,
    pub category: Category,
}

/// A coordinate on screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of a task element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolves a screen point to the category column enclosing it
pub trait ColumnHitTest {
    fn column_at(&self, point: Point) -> Option<Category>;
}

impl<F> ColumnHitTest for F
where
    F: Fn(Point) -> Option<Category>,
{
    fn column_at(&self, point: Point) -> Option<Category> {
        self(point)
    }
}

/// Pointer and touch state for one board view
#[derive(Debug)]
pub struct DragController {
    pointer: PointerDrag,
    touch: TouchGesture,
}

impl DragController {
    pub fn new(touch_threshold: Duration) -> Self {
        Self {
            pointer: PointerDrag::new(),
            touch: TouchGesture::new(touch_threshold),
        }
    }

    pub fn pointer_press(&mut self, task_id: TaskId) -> DragMessage {
        self.pointer.press(task_id)
    }

    pub fn pointer_enter(&mut self, category: Category) -> Option<Category> {
        self.pointer.enter_column(category)
    }

    pub fn pointer_leave(&mut self, category: Category) -> bool {
        self.pointer.leave_column(category)
    }

    pub fn pointer_release(&mut self, column: Option<Category>) -> Option<DropRequest> {
        self.pointer.release(column)
    }

    pub fn touch_start(&mut self, task_id: TaskId, size: ElementSize, at: DateTime<Utc>) {
        self.touch.start(task_id, size, at);
    }

    pub fn touch_move(&mut self, point: Point, at: DateTime<Utc>) -> TouchMove {
        self.touch.move_to(point, at)
    }

    pub fn touch_end(&mut self, point: Point, hit_test: &dyn ColumnHitTest) -> TouchEnd {
        self.touch.end(point, hit_test)
    }

    pub fn pointer(&self) -> &PointerDrag {
        &self.pointer
    }

    pub fn touch(&self) -> &TouchGesture {
        &self.touch
    }
}
