//! User-event entry points.
//!
//! [`Taskboard`] owns the stores, the selection and the gesture state, and
//! is where manager errors stop: rejected input becomes an alert, stale ids
//! are dropped quietly, and only storage failures reach the caller.

use crate::{
    config::TaskboardConfig,
    domain::{ActiveBoard, Board, BoardId, Category, Task, TaskId, Theme},
    drag::{
        ColumnHitTest, DragController, DragMessage, DropRequest, ElementSize, Point, TouchEnd,
        TouchMove,
    },
    error::{Disposition, Result},
    manager::{render_tasks, BoardManager, TaskManager},
    storage::Storage,
    store::{BoardStore, TaskStore},
    view::View,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub struct Taskboard<S: Storage, V: View> {
    storage: S,
    view: V,
    config: TaskboardConfig,
    tasks: TaskStore,
    boards: BoardStore,
    active: ActiveBoard,
    theme: Theme,
    drag: DragController,
}

impl<S: Storage, V: View> Taskboard<S, V> {
    /// Loads persisted state and draws the initial board
    pub fn open(storage: S, view: V, config: TaskboardConfig) -> Result<Self> {
        config.validate()?;

        let tasks = TaskStore::load(&storage)?;
        let boards = BoardStore::load(&storage, &config.default_boards)?;
        let theme = Theme::load(&storage)?;
        let active = ActiveBoard::initial(&boards);
        let drag = DragController::new(config.touch_drag_threshold());

        let mut board = Self {
            storage,
            view,
            config,
            tasks,
            boards,
            active,
            theme,
            drag,
        };
        board.render();

        info!(
            tasks = board.tasks.len(),
            boards = board.boards.len(),
            theme = %board.theme,
            "taskboard opened"
        );
        Ok(board)
    }

    pub fn task_manager(&mut self) -> TaskManager<'_> {
        TaskManager::new(
            &mut self.tasks,
            &self.boards,
            &self.active,
            &mut self.storage,
            &mut self.view,
        )
    }

    pub fn board_manager(&mut self) -> BoardManager<'_> {
        BoardManager::new(
            &mut self.boards,
            &mut self.tasks,
            &mut self.active,
            &mut self.storage,
            &mut self.view,
        )
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn boards(&self) -> &BoardStore {
        &self.boards
    }

    pub fn active(&self) -> &ActiveBoard {
        &self.active
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &TaskboardConfig {
        &self.config
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tasks on the active board; empty when no board exists
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.active.title() {
            Some(title) => self.tasks.list_by_board(title),
            None => Vec::new(),
        }
    }

    /// Redraws the board list and the task columns
    pub fn render(&mut self) {
        self.view.render_boards(self.boards.all(), &self.active);
        render_tasks(&mut self.view, &self.tasks, &self.active);
    }

    pub fn submit_new_task(
        &mut self,
        title: &str,
        category: Category,
        description: &str,
    ) -> Result<Option<Task>> {
        let result = self.task_manager().create(title, category, description);
        let created = self.settle(result)?;
        if let Some(task) = &created {
            self.view.notify(&format!("Task \"{}\" added!", task.title));
        }
        Ok(created)
    }

    pub fn submit_task_edit(
        &mut self,
        id: TaskId,
        title: &str,
        description: &str,
        category: Category,
    ) -> Result<Option<Task>> {
        let result = self.task_manager().update(id, title, description, category);
        let updated = self.settle(result)?;
        if let Some(task) = &updated {
            self.view.notify(&format!("Task \"{}\" updated!", task.title));
        }
        Ok(updated)
    }

    /// Asks for confirmation, then deletes; returns whether a task was removed
    pub fn request_task_delete(&mut self, id: TaskId) -> Result<bool> {
        if !self.view.confirm("Delete this task?") {
            debug!(task_id = %id, "task delete declined");
            return Ok(false);
        }
        let result = self.task_manager().delete(id);
        Ok(self.settle(result)?.flatten().is_some())
    }

    /// Prompts for a name and creates a board; cancelling does nothing
    pub fn request_board_create(&mut self) -> Result<Option<Board>> {
        let Some(title) = self.view.prompt_text("Enter board name:") else {
            debug!("board creation cancelled");
            return Ok(None);
        };
        self.create_board(&title)
    }

    /// Creates a board and makes it active
    pub fn create_board(&mut self, title: &str) -> Result<Option<Board>> {
        let result = self.board_manager().create(title);
        let created = self.settle(result)?;
        if let Some(board) = &created {
            let result = self.board_manager().select(&board.title);
            self.settle(result)?;
        }
        Ok(created)
    }

    pub fn rename_board(&mut self, id: BoardId, title: &str) -> Result<Option<Board>> {
        let result = self.board_manager().rename(id, title);
        self.settle(result)
    }

    /// Asks for confirmation, then deletes the board and its tasks
    pub fn request_board_delete(&mut self, id: BoardId) -> Result<Option<Board>> {
        let Some(title) = self.boards.get(id).map(|board| board.title.clone()) else {
            debug!(board_id = %id, "board delete ignored, board absent");
            return Ok(None);
        };
        let prompt = format!("Delete board \"{}\" and all of its tasks?", title);
        if !self.view.confirm(&prompt) {
            return Ok(None);
        }
        let result = self.board_manager().delete(id);
        self.settle(result)
    }

    pub fn select_board(&mut self, title: &str) -> Result<bool> {
        let result = self.board_manager().select(title);
        Ok(self.settle(result)?.is_some())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.theme.save(&mut self.storage)?;
        info!(theme = %self.theme, "theme changed");
        Ok(self.theme)
    }

    /// Starts a mouse drag; the payload travels with the drag
    pub fn pointer_press(&mut self, task_id: TaskId) -> DragMessage {
        self.drag.pointer_press(task_id)
    }

    pub fn pointer_enter_column(&mut self, category: Category) {
        if !self.drag.pointer().is_dragging() {
            return;
        }
        if let Some(previous) = self.drag.pointer_enter(category) {
            if previous != category {
                self.view.highlight_column(previous, false);
            }
        }
        self.view.highlight_column(category, true);
    }

    pub fn pointer_leave_column(&mut self, category: Category) {
        if self.drag.pointer_leave(category) {
            self.view.highlight_column(category, false);
        }
    }

    /// Ends a mouse drag over `column`, or outside every column when `None`
    pub fn pointer_release(&mut self, column: Option<Category>) -> Result<Option<Task>> {
        if let Some(hovered) = self.drag.pointer().hovered() {
            self.view.highlight_column(hovered, false);
        }
        match self.drag.pointer_release(column) {
            Some(request) => self.apply_drop(request),
            None => Ok(None),
        }
    }

    pub fn touch_start(&mut self, task_id: TaskId, size: ElementSize, at: DateTime<Utc>) {
        self.drag.touch_start(task_id, size, at);
    }

    /// Returns true when the move became a drag and scrolling should be suppressed
    pub fn touch_move(&mut self, point: Point, at: DateTime<Utc>) -> bool {
        match self.drag.touch_move(point, at) {
            TouchMove::Follow { task_id, placement } => {
                self.view.place_element(task_id, placement);
                true
            }
            TouchMove::Ignored => false,
        }
    }

    /// Finishes a touch gesture; a [`TouchEnd::Tap`] is left to the click handler
    pub fn touch_end(&mut self, point: Point, hit_test: &dyn ColumnHitTest) -> Result<TouchEnd> {
        let ended = self.drag.touch_end(point, hit_test);
        let applied = match ended {
            TouchEnd::Dropped(request) => self.apply_drop(request).map(|_| ()),
            TouchEnd::Ignored | TouchEnd::Tap(_) | TouchEnd::Cancelled(_) => Ok(()),
        };
        if let Some(task_id) = ended.restore_target() {
            self.view.restore_element(task_id);
        }
        applied.map(|()| ended)
    }

    fn apply_drop(&mut self, request: DropRequest) -> Result<Option<Task>> {
        debug!(
            task_id = %request.message.task_id,
            source = ?request.message.source,
            category = %request.category,
            "applying drop"
        );
        let result = self
            .task_manager()
            .reassign_category(request.message.task_id, request.category);
        Ok(self.settle(result)?.flatten())
    }

    /// Converts a manager error into an alert or a silent no-op; fatal errors pass through
    fn settle<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err.disposition() {
                Disposition::Alert(message) => {
                    debug!(error = %err, "operation rejected");
                    self.view.alert(&message);
                    Ok(None)
                }
                Disposition::Silent => {
                    debug!(error = %err, "operation skipped");
                    Ok(None)
                }
                Disposition::Fatal => Err(err),
            },
        }
    }
}
