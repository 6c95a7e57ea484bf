use leptos::html::Dialog;
use leptos::prelude::*;

use crate::models::TeamMember;

// Read-only roster listing; the board never edits team data.
#[component]
pub fn TeamModal(team: Vec<TeamMember>, dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"TEAM MEMBERS"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <div class="team-list">
                    {team
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-member-row">
                                    <img
                                        class="avatar"
                                        src=member.avatar.clone()
                                        alt=member.name.clone()
                                        width="40"
                                        height="40"
                                    />
                                    <span>{member.name.clone()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </dialog>
    }
}
