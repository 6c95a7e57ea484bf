use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::components::{EditTaskModal, TaskCard, TaskModal, TeamModal};
use crate::models::{Board, Task, TaskStatus, TeamMember};
use crate::services::{create_task_handler, move_task, update_task_handler};

#[component]
pub fn BoardPage(board: RwSignal<Board>, team: Vec<TeamMember>) -> impl IntoView {
    let create_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let team_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Which task the edit modal is showing; None keeps the modal unmounted.
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);

    let open_create_modal = move |_| {
        if let Some(dialog) = create_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };
    let open_team_modal = move |_| {
        if let Some(dialog) = team_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };
    let edit_task = move |task: Task| {
        set_editing_task.set(Some(task));
        if let Some(dialog) = edit_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let create_task = create_task_handler(board);
    let team_for_edit = team.clone();

    // Column identity and order come from the board itself; both are fixed
    // for the life of the session.
    let statuses: Vec<TaskStatus> = board.with_untracked(|board| {
        board.columns().iter().map(|column| column.status).collect()
    });

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Task Management Board"</h1>
                <div class="board-actions">
                    <button class="btn-secondary" on:click=open_team_modal>"Team Members"</button>
                    <button class="btn-primary" on:click=open_create_modal>"Create Task"</button>
                </div>
            </header>

            <div class="board-columns">
                {statuses
                    .into_iter()
                    .map(|status| {
                        let column_id = status.as_id();
                        view! {
                            <div
                                class="board-column"
                                on:dragover=|ev: ev::DragEvent| ev.prevent_default()
                                on:drop=move |ev: ev::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(data) = ev.data_transfer() {
                                        let task_id = data.get_data("taskId").unwrap_or_default();
                                        let source_column_id = data
                                            .get_data("sourceColumnId")
                                            .unwrap_or_default();
                                        move_task(board, &task_id, &source_column_id, column_id);
                                    }
                                }
                            >
                                <div class="column-header">
                                    <h2>{status.as_str()}</h2>
                                    <span class="task-count">
                                        {move || board.with(|board| board.column(status).tasks.len())}
                                    </span>
                                </div>
                                <div class="column-content">
                                    {move || {
                                        board
                                            .with(|board| {
                                                board
                                                    .column(status)
                                                    .tasks
                                                    .iter()
                                                    .cloned()
                                                    .map(|task| {
                                                        view! {
                                                            <TaskCard
                                                                task=task
                                                                on_edit=Box::new(edit_task)
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            })
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <TaskModal team=team.clone() on_create=create_task dialog_ref=create_dialog_ref />

            <TeamModal team=team dialog_ref=team_dialog_ref />

            // Edit modal is re-created for whichever task was last picked
            {move || {
                editing_task
                    .get()
                    .map(|task| {
                        view! {
                            <EditTaskModal
                                task=task
                                team=team_for_edit.clone()
                                on_save=update_task_handler(board)
                                dialog_ref=edit_dialog_ref
                            />
                        }
                    })
            }}
        </div>
    }
}
