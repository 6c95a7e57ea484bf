use chrono::{Days, NaiveDate, Utc};
use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Priority, TaskDraft, TaskStatus, TeamMember};

#[component]
pub fn TaskModal(
    team: Vec<TeamMember>,
    #[prop(into)] on_create: Box<dyn Fn(TaskDraft) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    // Form defaults: open, first roster member, medium priority, a one-week
    // date range starting today.
    let today = Utc::now().date_naive();
    let in_a_week = today.checked_add_days(Days::new(7)).unwrap_or(today);
    let default_assignee = team.first().map(|m| m.name.clone()).unwrap_or_default();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status_id, set_status_id) = signal(TaskStatus::Open.as_id().to_string());
    let (assignee_name, set_assignee_name) = signal(default_assignee.clone());
    let (priority_id, set_priority_id) = signal(Priority::Medium.as_id().to_string());
    let (start_date, set_start_date) = signal(today.to_string());
    let (end_date, set_end_date) = signal(in_a_week.to_string());

    let team_for_submit = team.clone();
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Date inputs are required, so a parse failure means the browser let
        // something malformed through; keep the modal open in that case.
        let parsed_start = match start_date.get_untracked().parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => return,
        };
        let parsed_end = match end_date.get_untracked().parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => return,
        };
        let assignee = match team_for_submit
            .iter()
            .find(|member| member.name == assignee_name.get_untracked())
            .or_else(|| team_for_submit.first())
        {
            Some(member) => member.clone(),
            None => return,
        };

        let draft = TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: TaskStatus::from_id(&status_id.get_untracked()).unwrap_or(TaskStatus::Open),
            assignee,
            priority: Priority::from_id(&priority_id.get_untracked()).unwrap_or(Priority::Medium),
            start_date: parsed_start,
            end_date: parsed_end,
        };
        on_create(draft);

        // Reset form fields to their defaults for the next task
        set_title.set(String::new());
        set_description.set(String::new());
        set_status_id.set(TaskStatus::Open.as_id().to_string());
        set_assignee_name.set(default_assignee.clone());
        set_priority_id.set(Priority::Medium.as_id().to_string());
        set_start_date.set(today.to_string());
        set_end_date.set(in_a_week.to_string());

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
                    <h3>"CREATE TASK"</h3>
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
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
