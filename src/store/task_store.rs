use crate::{
    domain::{Task, TaskId},
    error::{Result, TaskboardError},
    storage::Storage,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Owns the task collection in insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub const STORAGE_KEY: &'static str = "tasks";

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Loads persisted tasks; an absent key yields an empty store
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let tasks: Vec<Task> = match storage.get_item(Self::STORAGE_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        debug!(count = tasks.len(), "loaded tasks");
        Ok(Self { tasks })
    }

    /// Overwrites the persisted collection
    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        let json = serde_json::to_string(&self.tasks)?;
        storage.set_item(Self::STORAGE_KEY, &json)
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Tasks owned by `board_title`, in storage order
    pub fn list_by_board(&self, board_title: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.belongs_to(board_title))
            .collect()
    }

    /// A fresh id from the clock, bumped past every existing id
    pub fn next_id(&self, now: DateTime<Utc>) -> Result<TaskId> {
        let candidate = now.timestamp_millis();
        let highest = self.tasks.iter().map(|task| task.id.value()).max();
        match highest {
            Some(max) if candidate <= max => max
                .checked_add(1)
                .map(TaskId::new)
                .ok_or_else(|| TaskboardError::StorageError("task id space exhausted".to_string())),
            _ => Ok(TaskId::new(candidate)),
        }
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(position))
    }

    /// Deletes every task owned by `board_title`, returning how many went
    pub(crate) fn remove_by_board(&mut self, board_title: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.belongs_to(board_title));
        before - self.tasks.len()
    }

    /// Moves every task owned by `old_title` to `new_title`
    pub(crate) fn rename_board(&mut self, old_title: &str, new_title: &str) -> usize {
        let mut moved = 0;
        for task in self.tasks.iter_mut().filter(|task| task.belongs_to(old_title)) {
            task.board = new_title.to_string();
            moved += 1;
        }
        moved
    }
}
