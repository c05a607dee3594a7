use crate::{
    domain::{require_title, ActiveBoard, Category, Task, TaskId},
    error::{Result, TaskboardError},
    manager::render_tasks,
    storage::Storage,
    store::{BoardStore, TaskStore},
    view::View,
};
use chrono::Utc;
use tracing::{debug, info};

const TITLE_REQUIRED: &str = "Task title is required!";

/// Create, edit, delete and move tasks on the active board
pub struct TaskManager<'a> {
    tasks: &'a mut TaskStore,
    boards: &'a BoardStore,
    active: &'a ActiveBoard,
    storage: &'a mut dyn Storage,
    view: &'a mut dyn View,
}

impl<'a> TaskManager<'a> {
    pub fn new(
        tasks: &'a mut TaskStore,
        boards: &'a BoardStore,
        active: &'a ActiveBoard,
        storage: &'a mut dyn Storage,
        view: &'a mut dyn View,
    ) -> Self {
        Self {
            tasks,
            boards,
            active,
            storage,
            view,
        }
    }

    /// Adds a task to the active board
    pub fn create(&mut self, title: &str, category: Category, description: &str) -> Result<Task> {
        let title = require_title(title, TITLE_REQUIRED)?;
        let board = self.active.title().ok_or(TaskboardError::NoActiveBoard)?;
        if self.boards.find_by_title(board).is_none() {
            return Err(TaskboardError::BoardNotFound(board.to_string()));
        }

        let id = self.tasks.next_id(Utc::now())?;
        let task = Task::new(id, title, category, board.to_string())
            .with_description(description.trim().to_string());
        self.tasks.push(task.clone());
        self.commit()?;

        info!(task_id = %task.id, board = %task.board, category = %task.category, "task created");
        Ok(task)
    }

    /// Replaces the title, description and category of an existing task
    pub fn update(
        &mut self,
        id: TaskId,
        title: &str,
        description: &str,
        category: Category,
    ) -> Result<Task> {
        if self.tasks.get(id).is_none() {
            return Err(TaskboardError::TaskNotFound(id));
        }
        let title = require_title(title, TITLE_REQUIRED)?;

        let task = self
            .tasks
            .get_mut(id)
            .ok_or(TaskboardError::TaskNotFound(id))?;
        task.apply_edit(title, description.trim().to_string(), category);
        let task = task.clone();
        self.commit()?;

        info!(task_id = %id, category = %category, "task updated");
        Ok(task)
    }

    /// Removes a task; an unknown id is a no-op
    pub fn delete(&mut self, id: TaskId) -> Result<Option<Task>> {
        let Some(task) = self.tasks.remove(id) else {
            debug!(task_id = %id, "delete ignored, task absent");
            return Ok(None);
        };
        self.commit()?;
        self.view
            .notify(&format!("Task \"{}\" deleted!", task.title));

        info!(task_id = %id, board = %task.board, "task deleted");
        Ok(Some(task))
    }

    /// Moves a task to another column; an unknown id is a no-op
    pub fn reassign_category(&mut self, id: TaskId, category: Category) -> Result<Option<Task>> {
        let Some(task) = self.tasks.get_mut(id) else {
            debug!(task_id = %id, "reassign ignored, task absent");
            return Ok(None);
        };
        task.set_category(category);
        let task = task.clone();
        self.commit()?;

        info!(task_id = %id, category = %category, "task moved");
        Ok(Some(task))
    }

    pub fn list_by_board(&self, board_title: &str) -> Vec<&Task> {
        self.tasks.list_by_board(board_title)
    }

    fn commit(&mut self) -> Result<()> {
        self.tasks.save(&mut *self.storage)?;
        render_tasks(&mut *self.view, &*self.tasks, self.active);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Board, BoardId},
        manager::test_support::RecordingView,
        storage::MemoryStorage,
    };

    struct Fixture {
        tasks: TaskStore,
        boards: BoardStore,
        active: ActiveBoard,
        storage: MemoryStorage,
        view: RecordingView,
    }

    impl Fixture {
        fn new() -> Self {
            let boards = BoardStore::from_boards(vec![
                Board::new(BoardId::new(1), "A".to_string()),
                Board::new(BoardId::new(2), "B".to_string()),
            ]);
            Self {
                tasks: TaskStore::default(),
                active: ActiveBoard::initial(&boards),
                boards,
                storage: MemoryStorage::new(),
                view: RecordingView::default(),
            }
        }

        fn manager(&mut self) -> TaskManager<'_> {
            TaskManager::new(
                &mut self.tasks,
                &self.boards,
                &self.active,
                &mut self.storage,
                &mut self.view,
            )
        }
    }

    #[test]
    fn test_create_associates_with_active_board() {
        let mut fx = Fixture::new();
        let task = fx
            .manager()
            .create("  Write docs ", Category::Doing, "")
            .unwrap();

        assert_eq!(task.title, "Write docs");
        assert_eq!(task.board, "A");

        let listed = fx.manager().list_by_board("A").len();
        assert_eq!(listed, 1);
        assert_eq!(fx.view.rendered.last().unwrap(), &vec![task.id]);
        assert_eq!(TaskStore::load(&fx.storage).unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut fx = Fixture::new();
        let result = fx.manager().create("   ", Category::Todo, "desc");

        assert!(matches!(result, Err(TaskboardError::Validation(_))));
        assert!(fx.tasks.is_empty());
        assert!(fx.storage.is_empty());
        assert!(fx.view.rendered.is_empty());
    }

    #[test]
    fn test_create_without_active_board() {
        let mut fx = Fixture::new();
        fx.active = ActiveBoard::NoBoards;

        let result = fx.manager().create("Task", Category::Todo, "");
        assert!(matches!(result, Err(TaskboardError::NoActiveBoard)));
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut fx = Fixture::new();
        let first = fx.manager().create("one", Category::Todo, "").unwrap();
        let second = fx.manager().create("two", Category::Todo, "").unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut fx = Fixture::new();
        let task = fx.manager().create("Draft", Category::Todo, "old").unwrap();

        let updated = fx
            .manager()
            .update(task.id, "Final", "", Category::Done)
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.description, "");
        assert_eq!(updated.category, Category::Done);
        assert_eq!(fx.tasks.get(task.id).unwrap(), &updated);
    }

    #[test]
    fn test_update_unknown_task() {
        let mut fx = Fixture::new();
        let result = fx
            .manager()
            .update(TaskId::new(404), "Title", "", Category::Todo);

        assert!(matches!(result, Err(TaskboardError::TaskNotFound(_))));
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let mut fx = Fixture::new();
        let task = fx.manager().create("Keep", Category::Todo, "").unwrap();

        let result = fx.manager().update(task.id, "", "", Category::Done);
        assert!(matches!(result, Err(TaskboardError::Validation(_))));
        assert_eq!(fx.tasks.get(task.id).unwrap().title, "Keep");
        assert_eq!(fx.tasks.get(task.id).unwrap().category, Category::Todo);
    }

    #[test]
    fn test_delete_is_idempotent_and_notifies_once() {
        let mut fx = Fixture::new();
        let task = fx.manager().create("Gone", Category::Todo, "").unwrap();
        let keep = fx.manager().create("Stay", Category::Todo, "").unwrap();

        let removed = fx.manager().delete(task.id).unwrap();
        assert_eq!(removed.unwrap().title, "Gone");
        let after_once = fx.tasks.clone();

        assert!(fx.manager().delete(task.id).unwrap().is_none());
        assert_eq!(fx.tasks, after_once);
        assert!(fx.tasks.get(keep.id).is_some());
        assert_eq!(fx.view.notifications, vec!["Task \"Gone\" deleted!"]);
    }

    #[test]
    fn test_reassign_category_is_idempotent() {
        let mut fx = Fixture::new();
        let task = fx.manager().create("Move me", Category::Todo, "").unwrap();

        fx.manager()
            .reassign_category(task.id, Category::Doing)
            .unwrap();
        let once = fx.tasks.clone();
        fx.manager()
            .reassign_category(task.id, Category::Doing)
            .unwrap();

        assert_eq!(fx.tasks, once);
        assert_eq!(fx.tasks.get(task.id).unwrap().category, Category::Doing);
    }

    #[test]
    fn test_reassign_unknown_task_is_noop() {
        let mut fx = Fixture::new();
        let moved = fx
            .manager()
            .reassign_category(TaskId::new(1), Category::Done)
            .unwrap();

        assert!(moved.is_none());
        assert!(fx.storage.is_empty());
    }

    #[test]
    fn test_render_only_shows_active_board() {
        let mut fx = Fixture::new();
        let on_a = fx.manager().create("on A", Category::Todo, "").unwrap();
        fx.active = ActiveBoard::Selected("B".to_string());
        let on_b = fx.manager().create("on B", Category::Todo, "").unwrap();

        assert_eq!(on_b.board, "B");
        assert_eq!(fx.view.rendered.last().unwrap(), &vec![on_b.id]);
        assert_ne!(on_a.id, on_b.id);
    }
}
