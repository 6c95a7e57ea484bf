use leptos::ev;
use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskCard(task: Task, on_edit: Box<dyn Fn(Task) + 'static>) -> impl IntoView {
    let task_id = task.id.clone();
    let source_column_id = task.status.as_id();
    let task_for_edit = task.clone();

    // The drop handler on the receiving column reads these two entries back
    // out of the DataTransfer.
    let handle_drag_start = move |ev: ev::DragEvent| {
        if let Some(data) = ev.data_transfer() {
            let _ = data.set_data("taskId", &task_id);
            let _ = data.set_data("sourceColumnId", source_column_id);
        }
    };

    view! {
        <div class="task-card" draggable="true" on:dragstart=handle_drag_start>
            <div class="task-card-top">
                <h3>{task.title.clone()}</h3>
                <div class="task-card-badges">
                    <button
                        type="button"
                        class="edit-btn"
                        title="Edit Task"
                        on:click=move |_| on_edit(task_for_edit.clone())
                    >
                        "\u{270E}"
                    </button>
                    <span class=format!("priority-badge priority-{}", task.priority.as_id())>
                        {task.priority.as_id()}
                    </span>
                </div>
            </div>
            <p class="task-description">{task.description.clone()}</p>
            <div class="task-meta">
                <div class="task-dates">
                    <span>{format!("Start: {}", task.start_date.format("%b %-d, %Y"))}</span>
                    <span>{format!("End: {}", task.end_date.format("%b %-d, %Y"))}</span>
                </div>
                <span class=format!("status-pill status-{}", task.status.as_id())>
                    {task.status.as_str()}
                </span>
            </div>
            <div class="task-assignee">
                <img
                    class="avatar"
                    src=task.assignee.avatar.clone()
                    alt=task.assignee.name.clone()
                    width="24"
                    height="24"
                />
                <span>{task.assignee.name.clone()}</span>
            </div>
        </div>
    }
}
