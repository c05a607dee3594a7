use crate::store::BoardStore;

/// The board currently shown, held by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveBoard {
    Selected(String),
    /// Every board has been deleted
    NoBoards,
}

impl ActiveBoard {
    /// First existing board, else the empty sentinel
    pub fn initial(boards: &BoardStore) -> Self {
        boards
            .first()
            .map(|board| Self::Selected(board.title.clone()))
            .unwrap_or(Self::NoBoards)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Selected(title) => Some(title),
            Self::NoBoards => None,
        }
    }

    pub fn is(&self, title: &str) -> bool {
        self.title() == Some(title)
    }

    pub fn select(&mut self, title: impl Into<String>) {
        *self = Self::Selected(title.into());
    }
}
