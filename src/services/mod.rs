pub mod board_ops;

pub use board_ops::{create_task_handler, move_task, update_task_handler};
