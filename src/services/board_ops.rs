use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::models::{Board, Task, TaskDraft};

// Handlers bridging UI callbacks to the board state model. Each one runs a
// single synchronous update on the shared signal; failed operations leave
// the board untouched and are reported to the console.

pub fn create_task_handler(board: RwSignal<Board>) -> Box<dyn Fn(TaskDraft) + 'static> {
    Box::new(move |draft: TaskDraft| {
        board.update(|board| {
            if let Err(err) = board.create_task(draft.clone()) {
                report(&format!("Failed to create task: {err}"));
            }
        });
    })
}

pub fn update_task_handler(board: RwSignal<Board>) -> Box<dyn Fn(Task) + 'static> {
    Box::new(move |task: Task| {
        board.update(|board| {
            if let Err(err) = board.update_task(task.clone()) {
                report(&format!("Failed to update task {}: {err}", task.id));
            }
        });
    })
}

// Drop handlers pass whatever the DataTransfer carried; the board treats a
// stale or bogus reference as a no-op.
pub fn move_task(board: RwSignal<Board>, task_id: &str, source_column_id: &str, target_column_id: &str) {
    board.update(|board| board.move_task(task_id, source_column_id, target_column_id));
}

fn report(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
