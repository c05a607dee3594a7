use crate::{
    domain::{require_title, ActiveBoard, Board, BoardId},
    error::{Result, TaskboardError},
    manager::render_tasks,
    storage::Storage,
    store::{BoardStore, TaskStore},
    view::View,
};
use chrono::Utc;
use tracing::{debug, info};

const NAME_REQUIRED: &str = "Board name is required!";

/// Create, rename, delete and select boards, cascading into the task store
pub struct BoardManager<'a> {
    boards: &'a mut BoardStore,
    tasks: &'a mut TaskStore,
    active: &'a mut ActiveBoard,
    storage: &'a mut dyn Storage,
    view: &'a mut dyn View,
}

impl<'a> BoardManager<'a> {
    pub fn new(
        boards: &'a mut BoardStore,
        tasks: &'a mut TaskStore,
        active: &'a mut ActiveBoard,
        storage: &'a mut dyn Storage,
        view: &'a mut dyn View,
    ) -> Self {
        Self {
            boards,
            tasks,
            active,
            storage,
            view,
        }
    }

    /// Adds a board with a unique title
    ///
    /// The new board is not selected here; callers select it with
    /// [`BoardManager::select`] using the returned title.
    pub fn create(&mut self, title: &str) -> Result<Board> {
        let title = require_title(title, NAME_REQUIRED)?;
        if self.boards.title_taken(&title, None) {
            return Err(TaskboardError::DuplicateBoard(title));
        }

        let board = Board::new(self.boards.next_id(Utc::now())?, title);
        self.boards.push(board.clone());
        self.boards.save(&mut *self.storage)?;
        self.render_boards();

        info!(board_id = %board.id, board = %board.title, "board created");
        Ok(board)
    }

    /// Renames a board and moves its tasks along with it
    pub fn rename(&mut self, id: BoardId, new_title: &str) -> Result<Board> {
        let new_title = require_title(new_title, NAME_REQUIRED)?;
        let old_title = self
            .boards
            .get(id)
            .map(|board| board.title.clone())
            .ok_or_else(|| TaskboardError::BoardNotFound(id.to_string()))?;

        if old_title == new_title {
            debug!(board_id = %id, "rename ignored, title unchanged");
            return Ok(Board::new(id, old_title));
        }
        if self.boards.title_taken(&new_title, Some(id)) {
            return Err(TaskboardError::DuplicateBoard(new_title));
        }

        let board = self
            .boards
            .get_mut(id)
            .ok_or_else(|| TaskboardError::BoardNotFound(id.to_string()))?;
        board.title = new_title.clone();
        let board = board.clone();
        let moved = self.tasks.rename_board(&old_title, &new_title);

        self.boards.save(&mut *self.storage)?;
        self.tasks.save(&mut *self.storage)?;
        if self.active.is(&old_title) {
            self.active.select(new_title.clone());
        }
        self.render_all();

        info!(board_id = %id, from = %old_title, to = %new_title, moved, "board renamed");
        Ok(board)
    }

    /// Deletes a board together with every task it owns
    ///
    /// The first remaining board becomes active afterwards, or
    /// [`ActiveBoard::NoBoards`] when none is left.
    pub fn delete(&mut self, id: BoardId) -> Result<Board> {
        let board = self
            .boards
            .remove(id)
            .ok_or_else(|| TaskboardError::BoardNotFound(id.to_string()))?;
        let removed = self.tasks.remove_by_board(&board.title);

        self.boards.save(&mut *self.storage)?;
        self.tasks.save(&mut *self.storage)?;

        *self.active = ActiveBoard::initial(&*self.boards);
        self.render_all();

        info!(board_id = %id, board = %board.title, removed, "board deleted");
        Ok(board)
    }

    /// Makes an existing board the active one
    pub fn select(&mut self, title: &str) -> Result<()> {
        if self.boards.find_by_title(title).is_none() {
            return Err(TaskboardError::BoardNotFound(title.to_string()));
        }
        self.active.select(title);
        self.render_all();

        debug!(board = %title, "board selected");
        Ok(())
    }

    fn render_boards(&mut self) {
        self.view.render_boards(self.boards.all(), &*self.active);
    }

    fn render_all(&mut self) {
        self.render_boards();
        render_tasks(&mut *self.view, &*self.tasks, &*self.active);
    }
}
