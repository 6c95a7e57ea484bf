use leptos::prelude::*;

use crate::models::{team_members, Board};
use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    // The roster and the board state holder live here, at the top of the
    // tree, and are passed down explicitly; there is no ambient singleton.
    let team = team_members();
    let board = RwSignal::new(Board::with_demo_tasks(&team));

    view! {
        <main class="app">
            <BoardPage board=board team=team />
        </main>
    }
}
