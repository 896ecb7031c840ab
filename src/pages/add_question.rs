//! Question submission page. Only reachable with an authenticated session.

use leptos::prelude::*;

#[component]
pub fn AddQuestionPage() -> impl IntoView {
    view! {
        <div class="add-form">
            <h2>"Add a New Trivia Question"</h2>
        </div>
    }
}
