pub mod board_store;
pub mod task_store;

pub use board_store::BoardStore;
pub use task_store::TaskStore;
