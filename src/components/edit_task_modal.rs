use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Priority, Task, TaskStatus, TeamMember};

#[component]
pub fn EditTaskModal(
    #[prop(into)] task: Task,
    team: Vec<TeamMember>,
    #[prop(into)] on_save: Box<dyn Fn(Task) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (status_id, set_status_id) = signal(task.status.as_id().to_string());
    let (assignee_name, set_assignee_name) = signal(task.assignee.name.clone());
    let (priority_id, set_priority_id) = signal(task.priority.as_id().to_string());
    let (start_date, set_start_date) = signal(task.start_date.to_string());
    let (end_date, set_end_date) = signal(task.end_date.to_string());

    let team_for_submit = team.clone();
    let original = task.clone();
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let parsed_start = match start_date.get_untracked().parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => return,
        };
        let parsed_end = match end_date.get_untracked().parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => return,
        };
        let assignee = team_for_submit
            .iter()
            .find(|member| member.name == assignee_name.get_untracked())
            .cloned()
            .unwrap_or_else(|| original.assignee.clone());

        // Same id, every other field as edited. If the status changed, the
        // board relocates the task to the matching column.
        let updated = Task {
            id: original.id.clone(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: TaskStatus::from_id(&status_id.get_untracked()).unwrap_or(original.status),
            assignee,
            priority: Priority::from_id(&priority_id.get_untracked()).unwrap_or(original.priority),
            start_date: parsed_start,
            end_date: parsed_end,
        };
        on_save(updated);

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                            required
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=move |ev| set_status_id.set(event_target_value(&ev))
                            prop:value=move || status_id.get()
                        >
                            {TaskStatus::all()
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option value=status.as_id()>{status.as_str()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"ASSIGNEE"</label>
                        <select
                            on:change=move |ev| set_assignee_name.set(event_target_value(&ev))
                            prop:value=move || assignee_name.get()
                        >
                            {team
                                .iter()
                                .map(|member| {
                                    view! {
                                        <option value=member.name.clone()>
                                            {member.name.clone()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"PRIORITY"</label>
                        <select
                            on:change=move |ev| set_priority_id.set(event_target_value(&ev))
                            prop:value=move || priority_id.get()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|priority| {
                                    view! {
                                        <option value=priority.as_id()>{priority.as_str()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"START DATE"</label>
                            <input
                                type="date"
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                                prop:value=move || start_date.get()
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label>"END DATE"</label>
                            <input
                                type="date"
                                min=move || start_date.get()
                                on:input=move |ev| set_end_date.set(event_target_value(&ev))
                                prop:value=move || end_date.get()
                                required
                            />
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>
                            "CANCEL"
                        </button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
