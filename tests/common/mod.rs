#![allow(dead_code)]

use std::collections::VecDeque;
use taskboard_core::{
    ActiveBoard, Board, Category, MemoryStorage, Placement, Task, TaskId, Taskboard,
    TaskboardConfig, View,
};

/// View double with scripted answers and a log of every call
#[derive(Debug, Default)]
pub struct ScriptedView {
    pub confirm_answers: VecDeque<bool>,
    pub prompt_answers: VecDeque<Option<String>>,
    pub rendered: Vec<(Vec<TaskId>, ActiveBoard)>,
    pub board_lists: Vec<Vec<String>>,
    pub notifications: Vec<String>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub placements: Vec<(TaskId, Placement)>,
    pub restored: Vec<TaskId>,
    pub highlights: Vec<(Category, bool)>,
}

impl View for ScriptedView {
    fn render(&mut self, tasks: &[&Task], active: &ActiveBoard) {
        self.rendered
            .push((tasks.iter().map(|t| t.id).collect(), active.clone()));
    }

    fn render_boards(&mut self, boards: &[Board], _active: &ActiveBoard) {
        self.board_lists
            .push(boards.iter().map(|b| b.title.clone()).collect());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answers.pop_front().unwrap_or(true)
    }

    fn prompt_text(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.prompt_answers.pop_front().flatten()
    }

    fn place_element(&mut self, task: TaskId, placement: Placement) {
        self.placements.push((task, placement));
    }

    fn restore_element(&mut self, task: TaskId) {
        self.restored.push(task);
    }

    fn highlight_column(&mut self, category: Category, on: bool) {
        self.highlights.push((category, on));
    }
}

pub fn open_with(storage: MemoryStorage) -> Taskboard<MemoryStorage, ScriptedView> {
    Taskboard::open(storage, ScriptedView::default(), TaskboardConfig::default()).unwrap()
}

pub fn open_seeded(boards: &str, tasks: &str) -> Taskboard<MemoryStorage, ScriptedView> {
    use taskboard_core::Storage;

    let mut storage = MemoryStorage::new();
    storage.set_item("boards", boards).unwrap();
    storage.set_item("tasks", tasks).unwrap();
    open_with(storage)
}
