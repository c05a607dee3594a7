use crate::{
    domain::{Board, BoardId},
    error::{Result, TaskboardError},
    storage::Storage,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Owns the board collection in insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardStore {
    boards: Vec<Board>,
}

impl BoardStore {
    pub const STORAGE_KEY: &'static str = "boards";

    pub fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Seeded store with ids counting from 1
    pub fn seeded(titles: &[String]) -> Self {
        let boards = titles
            .iter()
            .zip(1..)
            .map(|(title, id)| Board::new(BoardId::new(id), title.trim().to_string()))
            .collect();
        Self { boards }
    }

    /// Loads persisted boards, seeding `defaults` when nothing was ever saved
    pub fn load(storage: &dyn Storage, defaults: &[String]) -> Result<Self> {
        match storage.get_item(Self::STORAGE_KEY)? {
            Some(json) => {
                let boards: Vec<Board> = serde_json::from_str(&json)?;
                debug!(count = boards.len(), "loaded boards");
                Ok(Self { boards })
            }
            None => {
                info!(count = defaults.len(), "seeding default boards");
                Ok(Self::seeded(defaults))
            }
        }
    }

    /// Overwrites the persisted collection
    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        let json = serde_json::to_string(&self.boards)?;
        storage.set_item(Self::STORAGE_KEY, &json)
    }

    pub fn all(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn first(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn get(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id == id)
    }

    /// Exact title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.title == title)
    }

    /// Case-insensitive collision check, optionally ignoring one board
    pub fn title_taken(&self, title: &str, except: Option<BoardId>) -> bool {
        self.boards
            .iter()
            .filter(|board| Some(board.id) != except)
            .any(|board| board.title_matches(title))
    }

    /// A fresh id from the clock, bumped past every existing id
    pub fn next_id(&self, now: DateTime<Utc>) -> Result<BoardId> {
        let candidate = now.timestamp_millis();
        let highest = self.boards.iter().map(|board| board.id.value()).max();
        match highest {
            Some(max) if candidate <= max => max
                .checked_add(1)
                .map(BoardId::new)
                .ok_or_else(|| TaskboardError::StorageError("board id space exhausted".to_string())),
            _ => Ok(BoardId::new(candidate)),
        }
    }

    pub(crate) fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    pub(crate) fn remove(&mut self, id: BoardId) -> Option<Board> {
        let position = self.boards.iter().position(|board| board.id == id)?;
        Some(self.boards.remove(position))
    }
}
