//! # Taskboard Core
//!
//! State management and drag-and-drop engine for a local kanban task board.
//!
//! Boards hold tasks in three fixed columns. The crate keeps the task and
//! board collections consistent (renaming or deleting a board cascades into
//! its tasks), persists them to a key-value [`Storage`], and turns pointer
//! and touch gestures into column moves. Drawing, dialogs and toasts are
//! delegated to a [`View`].

pub mod app;
pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod manager;
pub mod storage;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use app::Taskboard;
pub use config::TaskboardConfig;
pub use domain::{ActiveBoard, Board, BoardId, Category, Task, TaskId, Theme};
pub use drag::{
    ColumnHitTest, DragController, DragMessage, DropRequest, ElementSize, GestureSource, Point,
    TouchEnd, TouchMove,
};
pub use error::{Disposition, Result, TaskboardError};
pub use manager::{BoardManager, TaskManager};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{BoardStore, TaskStore};
pub use view::{NullView, Placement, View};
